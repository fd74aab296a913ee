use clap::Args;
use serde_json::json;

use crate::cli::config::open_client;
use crate::cli::utils::{format_table, output_empty_collection};
use crate::cli::OutputFormat;
use crate::config::ApiConfig;
use crate::filter::FilterOrder;
use crate::ledger::{Column, LedgerKind};
use crate::view::LedgerView;

#[derive(Args, Debug, Default)]
pub struct LedgerArgs {
    #[arg(long, short, help = "Search text matched against every column")]
    pub search: Option<String>,

    #[arg(long, value_enum, help = "Click a column header; repeat to flip the direction")]
    pub sort: Vec<Column>,

    #[arg(long, conflicts_with = "sort", help = "Explicit order such as \"serial desc\"")]
    pub order: Option<String>,
}

pub async fn handle(
    kind: LedgerKind,
    args: LedgerArgs,
    api: &ApiConfig,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let order = args.order.as_deref().map(FilterOrder::parse).transpose()?;

    let mut client = open_client(api)?;
    client.session().require_login()?;
    let user_name = client.session().user_name().map(str::to_string);

    let mut view = LedgerView::new(kind);
    view.load(&mut client, user_name.as_deref()).await?;

    apply_args(&mut view, &args, order);
    render(&view, &output_format)
}

fn apply_args(view: &mut LedgerView, args: &LedgerArgs, order: Option<crate::filter::SortKey>) {
    for column in &args.sort {
        view.sort(*column);
    }
    if let Some(key) = order {
        view.sort_by(key);
    }
    if let Some(query) = &args.search {
        view.search(query.clone());
    }
}

fn render(view: &LedgerView, output_format: &OutputFormat) -> anyhow::Result<()> {
    let kind = view.kind();

    if view.is_empty() {
        return output_empty_collection(output_format, "records", "No data");
    }

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "ledger": kind,
                    "sort": view.sort_state().active,
                    "search": view.query(),
                    "count": view.displayed().len(),
                    "records": view.displayed(),
                }))?
            );
        }
        OutputFormat::Text => {
            let sort = view.sort_state();
            let headers: Vec<String> = Column::ALL
                .iter()
                .map(|c| match sort.direction_of(*c) {
                    Some(dir) => format!("{} {}", kind.label(*c), dir.indicator()),
                    None => kind.label(*c).to_string(),
                })
                .collect();
            let rows: Vec<Vec<String>> = view
                .displayed()
                .iter()
                .map(|r| r.fields().iter().map(|f| f.to_string()).collect())
                .collect();

            println!("{}", kind.title());
            println!("{}", format_table(&headers, &rows));
            println!("\n{} record(s)", rows.len());
        }
    }
    Ok(())
}
