use std::io::{self, BufRead, Write};

use bmi_sdk::{classify, parse_measurement, BmiError, BmiReport, BmiResult, Classification};
use log::{debug, info};
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};

#[derive(Serialize)]
struct ClassifyOutput {
    bmi: f64,
    classification: Classification,
    label: &'static str,
}

#[derive(Serialize)]
struct ErrorOutput {
    error: &'static str,
    message: String,
}

/// One run of the calculator over a pair of streams.
///
/// Mistakes in the user's input are reported on `output` and are not errors
/// of the session; only I/O failures escape.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: CliConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: CliConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Asks for weight, then height, and prints the result
    pub fn run_interactive(&mut self) -> BmiResult<()> {
        info!("interactive mode, locale {:?}", self.config.locale);
        let outcome = self.read_report();
        self.finish(outcome, true)
    }

    pub fn run_calc(&mut self, weight: &str, height: &str) -> BmiResult<()> {
        let outcome = parse_measurement(weight).and_then(|weight| {
            let height = parse_measurement(height)?;
            BmiReport::new(weight, height)
        });
        self.finish(outcome, false)
    }

    pub fn run_classify(&mut self, bmi: &str) -> BmiResult<()> {
        let bmi = match parse_measurement(bmi) {
            Ok(bmi) => bmi,
            Err(e) => return self.report_error(e),
        };
        let classification = classify(bmi);
        debug!("classify {bmi} -> {classification:?}");

        let locale = self.config.locale;
        match self.config.output {
            OutputFormat::Text => {
                writeln!(self.output, "{}", locale.bmi_line(bmi))?;
                writeln!(
                    self.output,
                    "{}",
                    locale.classification_line(classification)
                )?;
            }
            OutputFormat::Json => self.write_json(&ClassifyOutput {
                bmi,
                classification,
                label: classification.label(locale),
            })?,
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_report(&mut self) -> BmiResult<BmiReport> {
        let prompt = self.config.locale.weight_prompt();
        let weight = self.prompt(prompt)?;
        let prompt = self.config.locale.height_prompt();
        let height = self.prompt(prompt)?;
        BmiReport::new(weight, height)
    }

    fn prompt(&mut self, text: &str) -> BmiResult<f64> {
        if self.config.output == OutputFormat::Text {
            write!(self.output, "{text}")?;
            self.output.flush()?;
        }

        // non UTF-8 lines must reach the parser as invalid numbers
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(BmiError::MissingInput);
        }

        parse_measurement(&String::from_utf8_lossy(&line))
    }

    fn finish(&mut self, outcome: BmiResult<BmiReport>, interactive: bool) -> BmiResult<()> {
        let report = match outcome {
            Ok(report) => report,
            Err(e) => {
                if interactive && self.config.output == OutputFormat::Text {
                    writeln!(self.output)?;
                }
                return self.report_error(e);
            }
        };
        debug!("{report:?}");

        let locale = self.config.locale;
        match self.config.output {
            OutputFormat::Text => {
                if interactive {
                    writeln!(self.output)?;
                }
                writeln!(self.output, "{}", locale.bmi_line(report.bmi))?;
                writeln!(
                    self.output,
                    "{}",
                    locale.classification_line(report.classification)
                )?;
            }
            OutputFormat::Json => self.write_json(&report)?,
        }
        Ok(())
    }

    fn report_error(&mut self, err: BmiError) -> BmiResult<()> {
        if !err.is_user_error() {
            return Err(err);
        }
        info!("rejected input: {err}");

        let message = self.config.locale.error_message(&err);
        match self.config.output {
            OutputFormat::Text => writeln!(self.output, "{message}")?,
            OutputFormat::Json => self.write_json(&ErrorOutput {
                error: err.kind(),
                message,
            })?,
        }
        Ok(())
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> BmiResult<()> {
        serde_json::to_writer(&mut self.output, value).map_err(io::Error::from)?;
        writeln!(self.output)?;
        Ok(())
    }
}
