use std::io::Read;
use std::sync::Arc;

use anyhow::Context;

use shopnav_guard::{NavigationGuard, Navigator, SessionStore};
use shopnav_routes::{catalog, RouteTable};
use shopnav_shell::script::parse_script;
use shopnav_shell::{run_script, ShellConfig, Step};

fn load_table(config: &ShellConfig) -> anyhow::Result<RouteTable> {
    match &config.routes_manifest {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read route manifest {}", path.display()))?;
            RouteTable::from_manifest_json(&text)
                .with_context(|| format!("invalid route manifest {}", path.display()))
        }
        None => catalog::default_table().context("built-in route catalog is invalid"),
    }
}

fn main() -> anyhow::Result<()> {
    shopnav_observability::init();

    let config = ShellConfig::from_env()?;
    let table = load_table(&config)?;
    tracing::info!(
        routes = table.len(),
        login_path = config.guard.login_path(),
        home_path = config.guard.home_path(),
        "route table ready"
    );

    let session = Arc::new(SessionStore::restored(config.token.clone()));
    let guard = NavigationGuard::new(Arc::new(table), config.guard.clone(), session.clone());
    let mut navigator = Navigator::with_history_limit(guard, config.history_limit);

    // Paths on the command line, otherwise a script on stdin.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let steps = if args.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read script from stdin")?;
        parse_script(&text)?
    } else {
        args.into_iter().map(Step::Navigate).collect()
    };

    let mut out = std::io::stdout().lock();
    run_script(&mut navigator, &session, &steps, &mut out)
}
