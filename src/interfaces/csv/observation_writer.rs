use crate::error::Result;
use crate::interfaces::action::Observation;
use std::io::Write;

/// Writes observations as CSV rows under an `action,output` header.
pub struct ObservationWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ObservationWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, observation: &Observation) -> Result<()> {
        self.writer.serialize(observation)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
