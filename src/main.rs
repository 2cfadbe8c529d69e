mod cli;

use billing_desk::adapters::outbound::console::StderrProgressReporter;
use billing_desk::adapters::outbound::network::{
    ApiGateway, BillingService, CustomerService, InventoryService,
};
use billing_desk::application::dto::{OutputFormat, ViewSnapshot};
use billing_desk::application::factories::{PresenterFactory, PresenterType, RendererFactory};
use billing_desk::application::shell::AppShell;
use billing_desk::billing::domain::CustomerId;
use billing_desk::config::{self, ConfigFile};
use billing_desk::ports::outbound::{BillingApi, CustomerApi, InventoryApi, ProgressReporter};
use billing_desk::shared::error::ExitCode;
use billing_desk::shared::Result;
use cli::Args;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over the default level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;

    let host = resolve_host(args.host.as_deref(), config.as_ref());
    let format = resolve_format(args.format, config.as_ref())?;
    tracing::debug!(host = %host, %format, "Resolved settings");

    // Create adapters (Dependency Injection)
    let gateway = ApiGateway::new(&host)?;
    let mut shell = AppShell::new(
        Arc::new(CustomerService::new(gateway.clone())),
        Arc::new(InventoryService::new(gateway.clone())),
        Arc::new(BillingService::new(gateway)),
    );
    let progress = StderrProgressReporter::new();

    let snapshot = if let Some(bill_id) = args.bill {
        progress.start_loading(&format!("bill {}", bill_id));
        let snapshot = shell.full_bill(bill_id).await;
        report_outcome(&progress, &snapshot);
        snapshot
    } else if let Some(customer_id) = args.open_bills {
        open_bills_of(&mut shell, &progress, customer_id).await?
    } else {
        open_route(&mut shell, &progress, &args.path).await?
    };

    let renderer = RendererFactory::create(format);
    let rendered = renderer.render(&snapshot)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&rendered)?;

    Ok(if snapshot.is_failed() {
        ExitCode::LoadFailed
    } else {
        ExitCode::Success
    })
}

/// Explicit `--config` must exist; otherwise the working directory is searched
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}

/// CLI flag, then config file, then the built-in default
fn resolve_host(cli_host: Option<&str>, config: Option<&ConfigFile>) -> String {
    cli_host
        .or_else(|| config.and_then(|c| c.host.as_deref()))
        .unwrap_or(ApiGateway::DEFAULT_HOST)
        .to_string()
}

fn resolve_format(
    cli_format: Option<OutputFormat>,
    config: Option<&ConfigFile>,
) -> Result<OutputFormat> {
    if let Some(format) = cli_format {
        return Ok(format);
    }
    let configured = match config {
        Some(c) => c.output_format()?,
        None => None,
    };
    Ok(configured.unwrap_or_default())
}

async fn open_route<C, I, B>(
    shell: &mut AppShell<C, I, B>,
    progress: &dyn ProgressReporter,
    url: &str,
) -> Result<ViewSnapshot>
where
    C: CustomerApi + 'static,
    I: InventoryApi + 'static,
    B: BillingApi + 'static,
{
    let path = shell.navigate(url)?;
    progress.start_loading(&path);
    shell.settle().await;

    let snapshot = current_snapshot(shell)?;
    report_outcome(progress, &snapshot);
    Ok(snapshot)
}

/// Loads the customer list, then follows that customer's orders action
async fn open_bills_of<C, I, B>(
    shell: &mut AppShell<C, I, B>,
    progress: &dyn ProgressReporter,
    customer_id: CustomerId,
) -> Result<ViewSnapshot>
where
    C: CustomerApi + 'static,
    I: InventoryApi + 'static,
    B: BillingApi + 'static,
{
    let customers_snapshot = open_route(shell, progress, "/customers").await?;

    let Some(customers) = shell.customers_view().and_then(|view| view.customers()) else {
        // The customer list failed to load; render that failure
        return Ok(customers_snapshot);
    };

    let customer = customers
        .into_iter()
        .find(|c| c.id == customer_id)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Customer {} is not in the customer list\n\n💡 Hint: Run `billing-desk /customers` to see the known ids.",
                customer_id
            )
        })?;

    progress.report(&format!(
        "📋 Opening the bills of {}",
        customer.name.as_deref().unwrap_or("customer")
    ));
    if let Some(view) = shell.customers_view() {
        view.get_orders(&customer);
    }

    let path = shell
        .process_navigation()?
        .ok_or_else(|| anyhow::anyhow!("The customers view did not request navigation"))?;
    progress.start_loading(&path);
    shell.settle().await;

    let snapshot = current_snapshot(shell)?;
    report_outcome(progress, &snapshot);
    Ok(snapshot)
}

fn current_snapshot<C, I, B>(shell: &AppShell<C, I, B>) -> Result<ViewSnapshot>
where
    C: CustomerApi + 'static,
    I: InventoryApi + 'static,
    B: BillingApi + 'static,
{
    shell
        .snapshot()
        .ok_or_else(|| anyhow::anyhow!("No view is active after navigation"))
}

fn report_outcome(progress: &dyn ProgressReporter, snapshot: &ViewSnapshot) {
    if snapshot.is_failed() {
        progress.finish_loading(&format!("⚠️  Failed to load {}", snapshot.path));
    } else {
        progress.finish_loading(&format!("✅ Loaded {}", snapshot.path));
    }
}
