// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};

/// Event sub-resource to request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Matches,
    Teams,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Matches => "matches",
            Resource::Teams => "teams",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Row-shaping toggles for the match schedule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScheduleOptions {
    pub blue_first: bool,   // blue alliance group before red
    pub keep_prefix: bool,  // leave "frc" on team keys
    pub hide_numbers: bool, // drop the leading match number field
}

/// Where rows go.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Destination {
    #[default]
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn from_arg(output: Option<&Path>) -> Self {
        match output {
            Some(p) => Destination::File(p.to_path_buf()),
            None => Destination::Stdout,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("<stdout>"),
            Destination::File(p) => write!(f, "{}", p.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_paths() {
        assert_eq!(Resource::Matches.to_string(), "matches");
        assert_eq!(Resource::Teams.path(), "teams");
    }

    #[test]
    fn destination_from_arg() {
        assert_eq!(Destination::from_arg(None), Destination::Stdout);
        assert_eq!(
            Destination::from_arg(Some(Path::new("out/schedule.csv"))),
            Destination::File(PathBuf::from("out/schedule.csv"))
        );
    }
}
