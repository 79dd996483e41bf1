/*!
 * Set-and-command workflow
 *
 * Drives one provider through a fixed sequence: resolve the directory, select
 * the provider by exact name, bind a session, set a parameter, then launch an
 * action. The first failure aborts the run; nothing is retried or rolled back.
 */

use std::fmt;

use groundlink_interface::{
    select, ActionInvocation, DirectoryAddress, DirectoryResolver, LinkError, ParameterAssignment,
    ProviderSession, SessionBinder,
};
use tracing::{debug, error, info};

use crate::config::GroundConfig;
use crate::error::{link_exit_code, EXIT_SUCCESS};

/// Position of a run in the linear workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Start,
    Resolved,
    Selected,
    Bound,
    ParameterSet,
    ActionInvoked,
    Done,
    Aborted,
}

impl WorkflowState {
    /// Stage attempted from this state, used to label failures
    pub fn next_stage(&self) -> &'static str {
        match self {
            WorkflowState::Start => "resolve",
            WorkflowState::Resolved => "select",
            WorkflowState::Selected => "bind",
            WorkflowState::Bound => "set-parameter",
            WorkflowState::ParameterSet => "invoke-action",
            WorkflowState::ActionInvoked | WorkflowState::Done | WorkflowState::Aborted => "none",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowState::Done | WorkflowState::Aborted)
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowState::Start => "start",
            WorkflowState::Resolved => "resolved",
            WorkflowState::Selected => "selected",
            WorkflowState::Bound => "bound",
            WorkflowState::ParameterSet => "parameter-set",
            WorkflowState::ActionInvoked => "action-invoked",
            WorkflowState::Done => "done",
            WorkflowState::Aborted => "aborted",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowReport {
    /// Either `Done` or `Aborted`
    pub state: WorkflowState,

    /// Last state reached before the run ended
    pub reached: WorkflowState,

    /// Abort cause
    pub error: Option<LinkError>,
}

impl WorkflowReport {
    fn done() -> Self {
        Self {
            state: WorkflowState::Done,
            reached: WorkflowState::ActionInvoked,
            error: None,
        }
    }

    fn aborted(reached: WorkflowState, error: LinkError) -> Self {
        Self {
            state: WorkflowState::Aborted,
            reached,
            error: Some(error),
        }
    }

    pub fn is_done(&self) -> bool {
        self.state == WorkflowState::Done
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        self.error.as_ref().map_or(EXIT_SUCCESS, link_exit_code)
    }
}

/// What a run targets and does once bound
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowPlan {
    pub provider_name: String,
    pub parameter: ParameterAssignment,
    pub action: ActionInvocation,
}

impl Default for WorkflowPlan {
    fn default() -> Self {
        Self::from(&GroundConfig::default())
    }
}

impl From<&GroundConfig> for WorkflowPlan {
    fn from(config: &GroundConfig) -> Self {
        Self {
            provider_name: config.provider_name.clone(),
            parameter: config.parameter.to_assignment(),
            action: config.action.to_invocation(),
        }
    }
}

/// Runs the set-and-command workflow against a directory and a session binder.
///
/// # Example
///
/// ```rust,no_run
/// use groundlink::workflow::{SetAndCommand, WorkflowPlan};
/// use groundlink_connect::{GrpcBinder, RemoteDirectory};
///
/// # async fn example() {
/// let workflow = SetAndCommand::new(
///     RemoteDirectory::default(),
///     GrpcBinder::default(),
///     WorkflowPlan::default(),
/// );
/// let report = workflow.run("grpc://10.0.0.5:1024/supervisor-directory").await;
/// std::process::exit(report.exit_code());
/// # }
/// ```
pub struct SetAndCommand<R, B> {
    resolver: R,
    binder: B,
    plan: WorkflowPlan,
}

impl<R, B> SetAndCommand<R, B>
where
    R: DirectoryResolver,
    B: SessionBinder,
{
    pub fn new(resolver: R, binder: B, plan: WorkflowPlan) -> Self {
        Self {
            resolver,
            binder,
            plan,
        }
    }

    pub fn plan(&self) -> &WorkflowPlan {
        &self.plan
    }

    /// Run the workflow once against the directory at `directory`.
    ///
    /// The abort cause is logged at error level and returned in the report.
    pub async fn run(&self, directory: &str) -> WorkflowReport {
        let mut reached = WorkflowState::Start;

        match self.execute(directory, &mut reached).await {
            Ok(()) => {
                info!(
                    "Parameter {} set and action {} launched on provider {}",
                    self.plan.parameter.name, self.plan.action.name, self.plan.provider_name
                );
                WorkflowReport::done()
            }
            Err(err) => {
                error!(
                    stage = reached.next_stage(),
                    kind = %err.kind(),
                    "Workflow aborted: {}",
                    err
                );
                WorkflowReport::aborted(reached, err)
            }
        }
    }

    async fn execute(
        &self,
        directory: &str,
        reached: &mut WorkflowState,
    ) -> Result<(), LinkError> {
        let address = DirectoryAddress::parse(directory)?;
        let listing = self.resolver.resolve(&address).await?;
        advance(reached, WorkflowState::Resolved);

        if listing.is_empty() {
            error!("Directory {} returned no providers", address);
        } else {
            debug!("Directory lists providers: {:?}", listing.names());
        }

        let descriptor = select(&listing, &self.plan.provider_name).ok_or_else(|| {
            LinkError::ProviderNotFound {
                name: self.plan.provider_name.clone(),
            }
        })?;
        advance(reached, WorkflowState::Selected);

        let mut session = self.binder.open_session(descriptor).await?;
        advance(reached, WorkflowState::Bound);

        let outcome = self.drive(session.as_mut(), reached).await;
        session.close().await;
        outcome
    }

    async fn drive(
        &self,
        session: &mut dyn ProviderSession,
        reached: &mut WorkflowState,
    ) -> Result<(), LinkError> {
        let parameter = &self.plan.parameter;
        session
            .set_parameter(&parameter.name, &parameter.value)
            .await?;
        advance(reached, WorkflowState::ParameterSet);

        let action = &self.plan.action;
        session
            .invoke_action(&action.name, &action.arguments)
            .await?;
        advance(reached, WorkflowState::ActionInvoked);

        Ok(())
    }
}

fn advance(reached: &mut WorkflowState, next: WorkflowState) {
    debug!("Workflow {} -> {}", reached, next);
    *reached = next;
}
