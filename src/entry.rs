use std::path::PathBuf;

use clap::Parser;

use crate::app;
use crate::args::{ClientArgs, Command, ConsentAction};
use crate::config::{Settings, load_config, resolve_consent_path};
use crate::consent::{ConsentGate, FileStore};
use crate::error::{AppError, AppResult, ValidationError};
use crate::session::ApiSession;

enum RunPlan {
    Consent(ConsentAction),
    Api(ApiCall),
}

enum ApiCall {
    Devices,
    List,
    Suspend,
    Overwrite { slot: usize },
    Delete { slot: usize },
    Resume { slot: usize, device: Option<String> },
    Export { output: Option<PathBuf> },
    Erase { yes: bool },
    Tour,
}

impl ApiCall {
    /// Whether the call issues a write; writes need the CSRF token first.
    const fn mutates(&self) -> bool {
        match *self {
            Self::Suspend
            | Self::Overwrite { .. }
            | Self::Delete { .. }
            | Self::Resume { .. }
            | Self::Erase { .. } => true,
            Self::Devices | Self::List | Self::Export { .. } | Self::Tour => false,
        }
    }
}

pub(crate) fn run() -> AppResult<()> {
    let args = ClientArgs::parse();
    crate::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args))
}

fn build_plan(command: Command) -> RunPlan {
    match command {
        Command::Consent { action } => RunPlan::Consent(action),
        Command::Devices => RunPlan::Api(ApiCall::Devices),
        Command::List => RunPlan::Api(ApiCall::List),
        Command::Suspend => RunPlan::Api(ApiCall::Suspend),
        Command::Overwrite { slot } => RunPlan::Api(ApiCall::Overwrite { slot }),
        Command::Delete { slot } => RunPlan::Api(ApiCall::Delete { slot }),
        Command::Resume { slot, device } => RunPlan::Api(ApiCall::Resume { slot, device }),
        Command::Export { output } => RunPlan::Api(ApiCall::Export { output }),
        Command::Erase { yes } => RunPlan::Api(ApiCall::Erase { yes }),
        Command::Tour => RunPlan::Api(ApiCall::Tour),
    }
}

async fn run_async(args: &ClientArgs) -> AppResult<()> {
    let config = load_config(args.config.as_deref())?;

    match build_plan(args.command.clone()) {
        RunPlan::Consent(action) => {
            let path = resolve_consent_path(args, config.as_ref());
            let mut gate = ConsentGate::new(FileStore::new(path));
            app::run_consent(&mut gate, &action)
        }
        RunPlan::Api(call) => {
            let settings = Settings::resolve(args, config.as_ref())?;
            let mut gate = ConsentGate::new(FileStore::new(settings.consent_path.clone()));

            // Default-deny: without consent no network component is built.
            if !gate.has_consent()? {
                tracing::error!(
                    "Consent has not been given yet. Run 'cassette consent grant' first."
                );
                return Err(AppError::validation(ValidationError::ConsentRequired));
            }

            let cookie = gate.cookie_value()?;
            let mut session =
                ApiSession::new(&settings.server_url, settings.timeout, cookie.as_deref())?;
            if call.mutates() {
                session.acquire_token().await?;
            }

            dispatch(&call, &session, &mut gate).await
        }
    }
}

async fn dispatch(
    call: &ApiCall,
    session: &ApiSession,
    gate: &mut ConsentGate<FileStore>,
) -> AppResult<()> {
    match *call {
        ApiCall::Devices => app::run_devices(session).await,
        ApiCall::List => app::run_list(session).await,
        ApiCall::Suspend => app::run_suspend(session).await,
        ApiCall::Overwrite { slot } => app::run_overwrite(session, slot).await,
        ApiCall::Delete { slot } => app::run_delete(session, slot).await,
        ApiCall::Resume { slot, ref device } => {
            app::run_resume(session, slot, device.as_deref()).await
        }
        ApiCall::Export { ref output } => app::run_export(session, output.as_deref()).await,
        ApiCall::Erase { yes } => app::run_erase(session, gate, yes).await,
        ApiCall::Tour => app::run_tour(session).await,
    }
}
