use crate::cli::ShowArgs;
use crate::context::{filtered, CliContext};
use crate::output;

pub async fn handle_show(ctx: &CliContext, args: ShowArgs) -> anyhow::Result<()> {
    let store = ctx.load_store(&args.input).await?;
    output::output_list(filtered(&store, &args.filter));
    Ok(())
}
