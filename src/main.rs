#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::{debug, Level};

use inspect_hid::report::ReportDescriptor;
use inspect_hid::*;

/// Inspect USB HID devices.
#[derive(Debug, clap::Parser)]
#[command(name = "inspect-hid", version)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// List connected HID devices.
    List {
        /// Output in JSON format.
        #[arg(long)]
        json: bool,
    },
    /// Show the USB device descriptor of a device.
    Descriptor {
        /// Device specifier (index or VID:PID).
        device: String,
        /// Output in JSON format.
        #[arg(long)]
        json: bool,
    },
    /// Show HID usage information for a device.
    Usage {
        /// Device specifier (index or VID:PID).
        device: String,
        /// Output in JSON format.
        #[arg(long)]
        json: bool,
    },
    /// Monitor HID reports from a device.
    Monitor {
        /// Device specifier (index or VID:PID).
        device: String,
        /// Output in JSON format.
        #[arg(long)]
        json: bool,
        /// Read timeout in milliseconds; Ctrl-C is checked between reads.
        #[arg(long, default_value_t = 100)]
        timeout_ms: u64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match run(args.cmd).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format::text::error(&e));
            let code = e.downcast_ref::<Error>().map_or(1, Error::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run(cmd: Cmd) -> Result<()> {
    // Device arguments are validated before libusb is initialized
    let svc = DeviceService::<host::Usb>::usb;
    match cmd {
        Cmd::List { json } => {
            let devs = svc()?.list_devices()?;
            println!(
                "{}",
                if json {
                    format::json::device_list(&devs)
                } else {
                    format::text::device_list(&devs)
                }
            );
        }
        Cmd::Descriptor { device, json } => {
            let spec = device.parse::<DeviceSpecifier>()?;
            let d = svc()?.device_descriptor(&spec)?;
            println!(
                "{}",
                if json {
                    format::json::device_descriptor(&d)
                } else {
                    format::text::device_descriptor(&d)
                }
            );
        }
        Cmd::Usage { device, json } => {
            let spec = device.parse::<DeviceSpecifier>()?;
            let raw = svc()?.report_descriptor(&spec)?;
            let d = ReportDescriptor::parse(&raw);
            let out = match (&d, json) {
                (Ok(d), false) => format::text::report_descriptor(d),
                (Ok(d), true) => format::json::report_descriptor(d),
                (Err(e), false) => format::text::descriptor_error(e, &raw),
                (Err(e), true) => format::json::descriptor_error(e, &raw),
            };
            println!("{out}");
            d.map_err(Error::from)?;
        }
        Cmd::Monitor {
            device,
            json,
            timeout_ms,
        } => {
            let spec = device.parse::<DeviceSpecifier>()?;
            monitor(svc()?, spec, json, timeout_ms).await?;
        }
    }
    Ok(())
}

async fn monitor(
    svc: DeviceService<host::Usb>,
    device: DeviceSpecifier,
    json: bool,
    timeout_ms: u64,
) -> Result<()> {
    let opts = MonitorOptions {
        read_timeout: Duration::from_millis(timeout_ms.max(1)),
        ..MonitorOptions::default()
    };
    let ct = CancellationToken::new();
    let stop = ct.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupted");
            stop.cancel();
        }
    });
    let fmt = if json {
        format::json::hid_report
    } else {
        format::text::hid_report
    };
    tokio::task::spawn_blocking(move || {
        svc.monitor(&device, &opts, &ct, |r| println!("{}", fmt(&r)))
    })
    .await??;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_device_fails_before_usb_setup() {
        let device = || "zz".to_owned();
        let cmds = [
            Cmd::Descriptor {
                device: device(),
                json: false,
            },
            Cmd::Usage {
                device: device(),
                json: true,
            },
            Cmd::Monitor {
                device: device(),
                json: false,
                timeout_ms: 100,
            },
        ];
        for cmd in cmds {
            let e = run(cmd).await.unwrap_err();
            assert_eq!(
                e.downcast_ref::<Error>(),
                Some(&Error::InvalidDeviceSpecifier { input: device() })
            );
            assert_eq!(
                format::text::error(&e),
                "Error: Invalid device specifier: 'zz'. Use index number or VID:PID format."
            );
            assert_eq!(e.downcast_ref::<Error>().map_or(1, Error::exit_code), 1);
        }
    }

    #[test]
    fn device_args() {
        let args = Args::parse_from(["inspect-hid", "-v", "usage", "zz", "--json"]);
        assert_eq!(args.verbose, 1);
        assert!(matches!(args.cmd, Cmd::Usage { device, json: true } if device == "zz"));
        let args = Args::parse_from(["inspect-hid", "monitor", "046d:c077"]);
        assert!(matches!(
            args.cmd,
            Cmd::Monitor {
                timeout_ms: 100,
                json: false,
                ..
            }
        ));
    }
}
