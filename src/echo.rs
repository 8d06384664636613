/// State of the echo screen: an input line and the last echoed text.
#[derive(Debug, Default)]
pub struct EchoState {
    pub input: String,
    pub echo: String,
}

impl EchoState {
    pub fn submit(&mut self) {
        self.echo = self.input.clone();
    }
}
