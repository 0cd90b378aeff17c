use crate::password::GenerationSpec;

use std::io::{ self, BufRead, Write };

const FLAG_PROMPTS: [&str; 4] = [
    "Include uppercase alphabetic chars?",
    "Include lowercase alphabetic chars?",
    "Include numeric chars?",
    "Include symbols?",
];

/// Interactive collection of generation parameters.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks for the length and the class flags until they form a valid spec.
    /// Every failure restarts from the length question.
    pub fn collect_spec(&mut self) -> io::Result<GenerationSpec> {
        loop {
            let length = self.ask("Length of generated password(s): ")?;
            if let Err(e) = crate::password::parse_length(&length) {
                log::debug!("rejected length: {}", e);
                writeln!(self.output, "\nThere was an error with the inputted password length - try again.")?;
                continue;
            }

            let mut flags: [String; 4] = Default::default();
            for (flag, prompt) in flags.iter_mut().zip(FLAG_PROMPTS) {
                *flag = self.ask(&format!("{} (y/n): ", prompt))?;
            }

            match GenerationSpec::from_raw(&length, flags.each_ref().map(String::as_str)) {
                Ok(spec) => return Ok(spec),
                Err(e) => {
                    log::debug!("rejected spec: {}", e);
                    writeln!(self.output, "\nOne or more flags (y/n) received invalid input, or all were false - try again.")?;
                }
            }
        }
    }

    /// Asks for the number of passwords. Negative answers count as zero.
    pub fn collect_count(&mut self) -> io::Result<usize> {
        loop {
            let answer = self.ask("Number of passwords to generate: ")?;
            match answer.trim().parse::<i64>() {
                Ok(n) => return Ok(usize::try_from(n).unwrap_or(0)),
                Err(_) => writeln!(self.output, "\nThe number of passwords must be an integer - try again.")?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed before all answers were given"));
        }

        Ok(line)
    }
}
