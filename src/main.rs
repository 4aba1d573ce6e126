use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use vault_icons::icon_gen::{self, Options, DEFAULT_SIZES, MAX_SIZE};

#[derive(Debug, Parser)]
#[clap(
    name = "vault-icons",
    about = "Generate the Clipboard Vault extension icons"
)]
struct Args {
    /// Output directory. The default is the `icons/` directory of the source tree this
    /// binary was built from.
    #[clap(
        short,
        long,
        value_name = "DIR",
        default_value_os_t = icon_gen::default_output_dir()
    )]
    output: PathBuf,

    /// Icon edge lengths to generate, in pixels [default: 16,48,128]
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        value_parser = clap::value_parser!(u32).range(1..=MAX_SIZE as i64)
    )]
    sizes: Option<Vec<u32>>,

    /// Also write manifest_icons.json for the extension manifest
    #[clap(long)]
    manifest: bool,

    /// Don't print progress lines
    #[clap(short, long)]
    quiet: bool,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Self {
            output: args.output,
            sizes: args.sizes.unwrap_or_else(|| DEFAULT_SIZES.to_vec()),
            manifest: args.manifest,
            quiet: args.quiet,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    icon_gen::generate_icons(&args.into())?;
    Ok(())
}
