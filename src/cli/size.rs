use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use super::command::{Cli, OutputFormat};
use crate::input::Input;
use crate::report::{SizeReport, plain_line, to_yaml};

pub fn cmd_size<W: Write>(cli: &Cli, multi: Option<&MultiProgress>, out: &mut W) -> Result<()> {
    let inputs: Vec<Input> = cli.inputs.iter().map(Input::new).collect();
    let prefix_paths = inputs.len() > 1;

    let pb = match multi {
        Some(multi) => Some(create_progress_bar(multi, inputs.len() as u64)?),
        None => None,
    };

    let mut reports = Vec::with_capacity(inputs.len());
    let mut failed = 0usize;

    for input in &inputs {
        let name = input.display_name();
        if let Some(pb) = &pb {
            pb.set_message(name.clone());
        }

        if input.is_pipe() {
            log::info!("Reading PNG header from stdin");
        } else {
            log::info!("Reading PNG header: {name}");
        }

        let result = input
            .read_size()
            .with_context(|| format!("Failed to read PNG size from {name}"));

        match result {
            Ok(size) => {
                log::debug!("{name}: {size}");
                if cli.format == OutputFormat::Plain {
                    let line = if prefix_paths {
                        format!("{name}: {}", plain_line(&size))
                    } else {
                        plain_line(&size)
                    };
                    emit(out, pb.as_ref(), &line)?;
                }
                reports.push(SizeReport::success(name, size));
            }
            Err(e) if cli.keep_going => {
                log::error!("{e:#}");
                failed += 1;
                reports.push(SizeReport::failure(name, &e));
            }
            Err(e) => {
                if let Some(pb) = &pb {
                    pb.finish_and_clear();
                }
                // Plain mode has already printed the inputs read so far.
                if cli.format == OutputFormat::Yaml && !reports.is_empty() {
                    write!(out, "{}", to_yaml(&reports)?)?;
                }
                return Err(e);
            }
        }

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    if cli.format == OutputFormat::Yaml {
        write!(out, "{}", to_yaml(&reports)?)?;
    }

    if failed > 0 {
        bail!("{failed} of {} inputs could not be read", inputs.len());
    }

    Ok(())
}

fn emit<W: Write>(out: &mut W, pb: Option<&ProgressBar>, line: &str) -> io::Result<()> {
    match pb {
        Some(pb) => pb.suspend(|| writeln!(out, "{line}")),
        None => writeln!(out, "{line}"),
    }
}

fn create_progress_bar(multi: &MultiProgress, total: u64) -> Result<ProgressBar> {
    let pb = multi.add(ProgressBar::new(total));
    pb.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} files ({percent}%)\n{msg} | elapsed: {elapsed_precise}",
    )?);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}
