use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{Context, bail};
    use clap::{Parser, Subcommand, ValueEnum};
    use glam::{IVec2, IVec3, IVec4};
    use impact_intvec::{
        Byte2, Byte3, Byte4, Short2, Short3, Short4, VectorHash, WrappingFrom,
    };
    use std::{fmt, str::FromStr};

    const COMPONENT_NAMES: [char; 4] = ['x', 'y', 'z', 'w'];

    #[derive(Debug, Parser)]
    #[command(about = "Inspect small byte and short vectors", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the hash and the wide hash of a vector
        Hash {
            /// Vector to hash, for example `Short3(1, -2, 3)`
            vector: AnyVector,
        },
        /// Print the vector selected by a swizzle pattern
        Swizzle {
            /// Vector to swizzle, for example `Byte4(1, 2, 3, 4)`
            vector: AnyVector,

            /// Two to four component names, for example `zyx` or `xxyy`
            pattern: String,
        },
        /// Convert a vector to another element kind, wrapping components that
        /// are out of range
        Convert {
            /// Vector to convert, for example `Short2(300, -5)`
            vector: AnyVector,

            /// Element kind to convert to
            #[arg(short, long, value_enum)]
            to: Kind,
        },
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
    enum Kind {
        Byte,
        Short,
    }

    #[derive(Clone, Copy, Debug)]
    enum AnyVector {
        Byte2(Byte2),
        Byte3(Byte3),
        Byte4(Byte4),
        Short2(Short2),
        Short3(Short3),
        Short4(Short4),
    }

    impl AnyVector {
        fn kind(&self) -> Kind {
            match self {
                Self::Byte2(_) | Self::Byte3(_) | Self::Byte4(_) => Kind::Byte,
                Self::Short2(_) | Self::Short3(_) | Self::Short4(_) => Kind::Short,
            }
        }

        fn components(&self) -> Vec<i32> {
            match self {
                Self::Byte2(v) => v.to_array().map(i32::from).to_vec(),
                Self::Byte3(v) => v.to_array().map(i32::from).to_vec(),
                Self::Byte4(v) => v.to_array().map(i32::from).to_vec(),
                Self::Short2(v) => v.to_array().map(i32::from).to_vec(),
                Self::Short3(v) => v.to_array().map(i32::from).to_vec(),
                Self::Short4(v) => v.to_array().map(i32::from).to_vec(),
            }
        }

        fn hashes(&self) -> (u32, String) {
            match self {
                Self::Byte2(v) => (v.compute_hash(), v.compute_hash_wide().to_string()),
                Self::Byte3(v) => (v.compute_hash(), v.compute_hash_wide().to_string()),
                Self::Byte4(v) => (v.compute_hash(), v.compute_hash_wide().to_string()),
                Self::Short2(v) => (v.compute_hash(), v.compute_hash_wide().to_string()),
                Self::Short3(v) => (v.compute_hash(), v.compute_hash_wide().to_string()),
                Self::Short4(v) => (v.compute_hash(), v.compute_hash_wide().to_string()),
            }
        }

        /// Builds a vector of the given kind from the given components,
        /// wrapping each component into the range of the kind.
        fn from_components(kind: Kind, components: &[i32]) -> Result<Self> {
            Ok(match (kind, components.len()) {
                (Kind::Byte, 2) => Self::Byte2(Byte2::wrapping_from(IVec2::from_slice(components))),
                (Kind::Byte, 3) => Self::Byte3(Byte3::wrapping_from(IVec3::from_slice(components))),
                (Kind::Byte, 4) => Self::Byte4(Byte4::wrapping_from(IVec4::from_slice(components))),
                (Kind::Short, 2) => {
                    Self::Short2(Short2::wrapping_from(IVec2::from_slice(components)))
                }
                (Kind::Short, 3) => {
                    Self::Short3(Short3::wrapping_from(IVec3::from_slice(components)))
                }
                (Kind::Short, 4) => {
                    Self::Short4(Short4::wrapping_from(IVec4::from_slice(components)))
                }
                (_, n_components) => {
                    bail!("Vectors must have 2, 3 or 4 components, got {n_components}")
                }
            })
        }

        fn swizzled(&self, pattern: &str) -> Result<Self> {
            let components = self.components();
            let selected = pattern
                .chars()
                .map(|name| {
                    COMPONENT_NAMES[..components.len()]
                        .iter()
                        .position(|&component_name| component_name == name)
                        .map(|idx| components[idx])
                        .with_context(|| {
                            format!("Invalid component `{name}` in swizzle pattern `{pattern}`")
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            Self::from_components(self.kind(), &selected)
        }

        fn converted(&self, kind: Kind) -> Result<Self> {
            Self::from_components(kind, &self.components())
        }
    }

    impl FromStr for AnyVector {
        type Err = anyhow::Error;

        fn from_str(string: &str) -> Result<Self> {
            let type_name = string.split('(').next().unwrap_or_default().trim();
            Ok(match type_name {
                "Byte2" => Self::Byte2(string.parse()?),
                "Byte3" => Self::Byte3(string.parse()?),
                "Byte4" => Self::Byte4(string.parse()?),
                "Short2" => Self::Short2(string.parse()?),
                "Short3" => Self::Short3(string.parse()?),
                "Short4" => Self::Short4(string.parse()?),
                _ => bail!(
                    "Unknown vector type `{type_name}`, expected one of \
                     Byte2, Byte3, Byte4, Short2, Short3 or Short4"
                ),
            })
        }
    }

    impl fmt::Display for AnyVector {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Byte2(v) => fmt::Display::fmt(v, f),
                Self::Byte3(v) => fmt::Display::fmt(v, f),
                Self::Byte4(v) => fmt::Display::fmt(v, f),
                Self::Short2(v) => fmt::Display::fmt(v, f),
                Self::Short3(v) => fmt::Display::fmt(v, f),
                Self::Short4(v) => fmt::Display::fmt(v, f),
            }
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Running {:?}", cli.command);

        match cli.command {
            Command::Hash { vector } => {
                let (hash, wide_hash) = vector.hashes();
                println!("hash:     {hash:#010x}");
                println!("hashwide: {wide_hash}");
            }
            Command::Swizzle { vector, pattern } => {
                let swizzled = vector.swizzled(&pattern)?;
                log::info!("{vector}.{pattern} = {swizzled}");
                println!("{swizzled}");
            }
            Command::Convert { vector, to } => {
                let converted = vector.converted(to)?;
                if converted.components() != vector.components() {
                    log::warn!("Converting {vector} to {to:?} components wrapped some values");
                }
                println!("{converted}");
            }
        }
        Ok(())
    }

}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
