use crate::cli::{ExportArgs, RenderArgs};
use crate::context::{filtered, CliContext};
use crate::output;
use logbook_domain::LogExporter;

pub async fn handle_export(ctx: &CliContext, args: ExportArgs) -> anyhow::Result<()> {
    let format = ctx.export_format(args.format.as_deref())?;
    let store = ctx.load_store(&args.input).await?;
    let entries = filtered(&store, &args.filter);

    let response = ctx.deliver(&entries, format, &args.output_dir).await?;
    output::output_success(&response);
    Ok(())
}

pub async fn handle_render(ctx: &CliContext, args: RenderArgs) -> anyhow::Result<()> {
    let store = ctx.load_store(&args.input).await?;
    let entries = filtered(&store, &args.filter);

    let body = LogExporter::serialize(&entries, &args.format)?;
    print!("{}", body);
    Ok(())
}
