use arp_inspect_domain::IncompleteMacReport;
use std::fmt;
use std::path::Path;

const BANNER_BOX: &str = r##"
 ┌─────────────────────────────────────────┐
 │  This program searches a text file      │
 │  created from the "#sh ip arp" command  │
 │  from a Cisco switch for any incomplete │
 │  MAC Addresses; if there are any it     │
 │  lists the line in which it was found,  │
 │  and saves the results to a text file   │
 └─────────────────────────────────────────┘"##;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Start-up banner naming the report file this run writes
pub struct Banner<'a> {
    output_path: &'a Path,
}

impl<'a> Banner<'a> {
    pub fn new(output_path: &'a Path) -> Self {
        Self { output_path }
    }
}

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", BANNER_BOX)?;
        writeln!(f, "   Results file: \"{}\"", file_name(self.output_path))
    }
}

/// Console summary of a finished scan
pub struct Results<'a> {
    report: &'a IncompleteMacReport,
    output_path: &'a Path,
}

impl<'a> Results<'a> {
    pub fn new(report: &'a IncompleteMacReport, output_path: &'a Path) -> Self {
        Self {
            report,
            output_path,
        }
    }
}

impl fmt::Display for Results<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.report.is_empty() {
            return writeln!(f, "\nNo incomplete MAC addresses found.");
        }

        writeln!(f, "\n=======================================\n")?;
        writeln!(
            f,
            "There are {} incomplete MAC Addresses\n",
            self.report.count()
        )?;
        for record in self.report {
            writeln!(f, "{}", record.raw)?;
        }
        writeln!(f, "\n-- Saved to \"{}\" --", file_name(self.output_path))
    }
}
