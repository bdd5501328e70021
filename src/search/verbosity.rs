use strum_macros::Display;

/// How much the binaries log, mapped onto the maximum [`tracing::Level`].
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Verbosity {
    Silent,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_grow_with_verbosity() {
        assert_eq!(tracing::Level::from(Verbosity::Silent), tracing::Level::ERROR);
        assert_eq!(tracing::Level::from(Verbosity::default()), tracing::Level::INFO);
        assert!(tracing::Level::from(Verbosity::Debug) > tracing::Level::from(Verbosity::Verbose));
    }
}
