use arp_inspect_domain::DomainError;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Asks for the capture path on `out`, offering the files of the current
/// directory, and reads one answer from `input`.
pub async fn prompt_for_input<R, W>(
    input: &mut R,
    out: &mut W,
    files: &[String],
) -> anyhow::Result<String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Please select the #SH IP ARP Data text file\n")?;
    writeln!(out, "You can enter:")?;
    writeln!(out, "  - A filename in the current directory")?;
    writeln!(out, "  - A relative path (e.g., ../data/arp.txt)")?;
    writeln!(out, "  - An absolute path (e.g., /path/to/arp.txt)")?;
    writeln!(out, "  - A path with ~ (e.g., ~/Documents/arp.txt)\n")?;

    if !files.is_empty() {
        writeln!(out, "Files in current directory: {}\n", files.join(", "))?;
    }

    write!(out, "Please enter the file path: ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer).await?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(DomainError::NoInputPath.into());
    }
    Ok(answer.to_string())
}

pub async fn wait_for_enter<R, W>(input: &mut R, out: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "\nPress enter to exit the program ")?;
    out.flush()?;
    let mut discard = String::new();
    input.read_line(&mut discard).await?;
    Ok(())
}
