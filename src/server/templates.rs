use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

#[derive(Template, Default)]
#[template(path = "ai_html.html")]
pub struct AiHtmlTemplate {
    pub msg: String,
    /// Model output, rendered unescaped.
    pub ai_answer: Option<String>,
    pub ai_token_usage: Option<u32>,
    pub error: Option<String>,
}

#[derive(Template, Default)]
#[template(path = "qr_generator.html")]
pub struct QrGeneratorTemplate {
    pub info: String,
    pub qr_url: Option<String>,
    pub error: Option<String>,
}
