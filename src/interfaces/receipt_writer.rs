use crate::application::register::Outcome;
use crate::domain::change::ChangeStatus;
use crate::domain::drawer::Drawer;
use crate::error::Result;
use std::io::Write;

pub const NO_CHANGE_DUE: &str = "No change due - customer paid with exact cash.";

/// Renders register outcomes and the drawer contents.
///
/// Outcomes are written as text (`Status: OPEN` plus one `DENOM: $x.xx` line per
/// line item) or as one JSON object per line. The drawer is written as
/// `denomination,amount` CSV.
pub struct ReceiptWriter<W: Write> {
    out: W,
    json: bool,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, json: false }
    }

    pub fn json(out: W) -> Self {
        Self { out, json: true }
    }

    pub fn write_outcome(&mut self, outcome: &Outcome) -> Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, outcome)?;
            writeln!(self.out)?;
            return Ok(());
        }

        match outcome {
            Outcome::NoChangeDue => writeln!(self.out, "{NO_CHANGE_DUE}")?,
            Outcome::Change(result) => {
                writeln!(self.out, "Status: {}", result.status)?;
                if result.status != ChangeStatus::InsufficientFunds {
                    for item in &result.change {
                        writeln!(self.out, "{}: {}", item.denomination, item.amount)?;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn write_drawer(&mut self, drawer: &Drawer) -> Result<()> {
        let mut writer = csv::Writer::from_writer(&mut self.out);
        writer.write_record(["denomination", "amount"])?;
        for (denomination, amount) in drawer.entries() {
            writer.write_record([
                denomination.name().to_string(),
                amount.to_decimal().to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
