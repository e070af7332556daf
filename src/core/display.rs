use colored::Colorize;
use std::fmt;

use super::{
    loc::Loc,
    world::{Outcome, World},
};

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Score: {}", self.score.to_string().bright_yellow())?;
        match self.outcome {
            Some(Outcome::Win) => writeln!(f, "Result: {}", "win".bright_green())?,
            Some(Outcome::Lose) => writeln!(f, "Result: {}", "lose".bright_red())?,
            None => {}
        }
        writeln!(f)?;

        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let loc = Loc::new(x, y);
                let cell = match self.layout_char(loc) {
                    'P' => "P".bright_yellow().bold(),
                    'G' => {
                        let scared = self
                            .adversaries()
                            .iter()
                            .any(|a| a.loc == loc && a.is_scared());
                        if scared {
                            "G".bright_cyan()
                        } else {
                            "G".bright_red().bold()
                        }
                    }
                    '%' => "%".blue(),
                    '.' => ".".white(),
                    'o' => "o".bright_white().bold(),
                    _ => " ".normal(),
                };
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
