//! Command-line parsing for the `qr-studio` host

use anyhow::{anyhow, bail, Context, Result};
use app_core::WifiSecurity;
use app_platform::SaveLocation;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "\
Usage: qr-studio <command>

Commands:
  home [--dark]                      Print the home screen view
  ssid <text>                        Validate a network name
  wifi <ssid> [--password P] [--security wpa|wep|open] [--hidden]
       [--save FILE [--to downloads|pictures|documents|DIR]]
                                     Build the WiFi form and its payload;
                                     --save writes the payload text to FILE,
                                     or to FILE's name inside --to
  theme [toggle|light|dark|system]   Change the saved color mode
";

/// How the `theme` command changes the saved color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Toggle,
    Set(app_platform::ColorMode),
}

/// Where `wifi --save` writes the payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTarget {
    pub location: SaveLocation,
    pub file_name: String,
}

impl SaveTarget {
    /// `--save FILE` alone targets FILE's own directory; `--to` overrides it
    fn new(file: &Path, to: Option<SaveLocation>) -> Result<Self> {
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .context("--save needs a file name")?;
        let location = to.unwrap_or_else(|| {
            let dir = file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            SaveLocation::Custom(dir)
        });
        Ok(Self { location, file_name })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Home { dark: bool },
    Ssid { text: String },
    Wifi {
        ssid: String,
        password: String,
        security: WifiSecurity,
        hidden: bool,
        save: Option<SaveTarget>,
    },
    Theme(ThemeAction),
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let Some(command) = args.next() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "home" => {
            let mut dark = false;
            for arg in args {
                match arg.as_str() {
                    "--dark" => dark = true,
                    other => bail!("unexpected argument for home: {}", other),
                }
            }
            Ok(Command::Home { dark })
        }
        "ssid" => {
            // An empty string is a valid thing to ask about
            let text = args.next().unwrap_or_default();
            if let Some(extra) = args.next() {
                bail!("unexpected argument for ssid: {}", extra);
            }
            Ok(Command::Ssid { text })
        }
        "wifi" => {
            let ssid = args.next().ok_or_else(|| anyhow!("wifi requires a network name"))?;
            let mut password = String::new();
            let mut security = WifiSecurity::default();
            let mut hidden = false;
            let mut save = None;
            let mut to = None;

            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--password" => {
                        password = args.next().context("--password needs a value")?;
                    }
                    "--security" => {
                        let value = args.next().context("--security needs a value")?;
                        security = value.parse().map_err(|e: String| anyhow!(e))?;
                    }
                    "--hidden" => hidden = true,
                    "--save" => {
                        save = Some(PathBuf::from(args.next().context("--save needs a file name")?));
                    }
                    "--to" => {
                        let value = args.next().context("--to needs a location")?;
                        to = Some(value.parse::<SaveLocation>().map_err(|e| anyhow!(e))?);
                    }
                    other => bail!("unexpected argument for wifi: {}", other),
                }
            }
            let save = match (save, to) {
                (Some(file), to) => Some(SaveTarget::new(&file, to)?),
                (None, Some(_)) => bail!("--to requires --save"),
                (None, None) => None,
            };
            Ok(Command::Wifi { ssid, password, security, hidden, save })
        }
        "theme" => {
            let action = match args.next().as_deref() {
                None | Some("toggle") => ThemeAction::Toggle,
                Some(mode) => ThemeAction::Set(mode.parse().map_err(|e: String| anyhow!(e))?),
            };
            Ok(Command::Theme(action))
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => bail!("unknown command: {}\n\n{}", other, USAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_platform::ColorMode;

    #[test]
    fn test_no_args_is_help() {
        assert_eq!(parse(Vec::<String>::new()).unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_home() {
        assert_eq!(parse(["home"]).unwrap(), Command::Home { dark: false });
        assert_eq!(parse(["home", "--dark"]).unwrap(), Command::Home { dark: true });
        assert!(parse(["home", "--bright"]).is_err());
    }

    #[test]
    fn test_parse_ssid() {
        assert_eq!(
            parse(["ssid", "Cafe Guest"]).unwrap(),
            Command::Ssid { text: "Cafe Guest".to_string() }
        );
        assert_eq!(parse(["ssid"]).unwrap(), Command::Ssid { text: String::new() });
    }

    #[test]
    fn test_parse_wifi() {
        let command = parse([
            "wifi", "Lab", "--password", "secret123", "--security", "wep", "--hidden", "--save",
            "lab.txt",
        ])
        .unwrap();
        assert_eq!(
            command,
            Command::Wifi {
                ssid: "Lab".to_string(),
                password: "secret123".to_string(),
                security: WifiSecurity::Wep,
                hidden: true,
                save: Some(SaveTarget {
                    location: SaveLocation::Custom(PathBuf::from(".")),
                    file_name: "lab.txt".to_string(),
                }),
            }
        );
    }

    #[test]
    fn test_parse_wifi_save_locations() {
        let save_of = |args: &[&str]| match parse(args.iter().copied()).unwrap() {
            Command::Wifi { save, .. } => save,
            other => panic!("expected wifi, got {:?}", other),
        };

        let target = save_of(&["wifi", "Lab", "--save", "out/lab.txt"]).unwrap();
        assert_eq!(target.location, SaveLocation::Custom(PathBuf::from("out")));
        assert_eq!(target.file_name, "lab.txt");

        let target = save_of(&["wifi", "Lab", "--to", "downloads", "--save", "lab.txt"]).unwrap();
        assert_eq!(target.location, SaveLocation::Downloads);

        let target = save_of(&["wifi", "Lab", "--save", "x/lab.txt", "--to", "Pictures"]).unwrap();
        assert_eq!(target.location, SaveLocation::Pictures);
        assert_eq!(target.file_name, "lab.txt");

        assert!(parse(["wifi", "Lab", "--to", "documents"]).is_err());
        assert!(parse(["wifi", "Lab", "--save", "lab.txt", "--to"]).is_err());
    }

    #[test]
    fn test_parse_wifi_errors() {
        assert!(parse(["wifi"]).is_err());
        assert!(parse(["wifi", "Lab", "--password"]).is_err());
        assert!(parse(["wifi", "Lab", "--security", "wpa9"]).is_err());
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(parse(["theme"]).unwrap(), Command::Theme(ThemeAction::Toggle));
        assert_eq!(
            parse(["theme", "dark"]).unwrap(),
            Command::Theme(ThemeAction::Set(ColorMode::Dark))
        );
        assert!(parse(["theme", "sepia"]).is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse(["scan"]).is_err());
    }
}
