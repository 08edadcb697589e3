use miette::Result;

fn main() -> Result<()> {
    jscribe::cli::run()
}
