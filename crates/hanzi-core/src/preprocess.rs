pub trait Preprocessor {
    // Queries are matched codepoint-exact, so only surrounding whitespace goes
    fn process<'a>(&self, text: &'a str) -> &'a str {
        text.trim()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
