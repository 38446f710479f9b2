use crate::result_display::interface::{ResultDisplay, ResultView};
use std::error::Error;

pub struct ResultDisplayConsole {
    width: usize,
}

impl ResultDisplayConsole {
    pub fn new() -> Self {
        Self { width: 32 }
    }

    fn frame(&self, view: &ResultView) -> Vec<String> {
        let mut frame = vec![format!("┌{}┐", "─".repeat(self.width))];
        for line in view.lines() {
            let text: String = line.chars().take(self.width).collect();
            let padding = self.width - text.chars().count();
            frame.push(format!("│{}{}│", text, " ".repeat(padding)));
        }
        frame.push(format!("└{}┘", "─".repeat(self.width)));
        frame
    }
}

impl ResultDisplay for ResultDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn render(&mut self, view: &ResultView) -> Result<(), Box<dyn Error + Send + Sync>> {
        for line in self.frame(view) {
            println!("{}", line);
        }
        Ok(())
    }
}
