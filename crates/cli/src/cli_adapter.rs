use charity_report_core::domain::charity_project::format_elapsed;
use charity_report_core::ports::command_handler::{Command, CommandError, CommandHandler};
use charity_report_core::ports::routine::Routine;
use tracing::{error, info, instrument};

use crate::service_factory::Services;

pub struct CliAdapter {
    services: Services,
}

impl std::fmt::Debug for CliAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliAdapter")
            .field("report_routine", &self.services.report_routine)
            .finish()
    }
}

impl CliAdapter {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    #[instrument]
    pub async fn run(&self, args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
        let command = parse_args(&args)?;

        match self.handle(command).await {
            Ok(result) => {
                info!("{}", result);
                Ok(())
            }
            Err(report) => {
                error!("Command failed: {:?}", report);
                Err(format!("Command failed: {:?}", report).into())
            }
        }
    }
}

pub fn parse_args(args: &[String]) -> Result<Command, CommandError> {
    match args.get(1).map(|s| s.as_str()) {
        None | Some("publish") => Ok(Command::PublishReport),
        Some("ranking") => Ok(Command::ShowRanking),
        Some("health") => Ok(Command::HealthCheck),
        Some(other) => Err(CommandError::InvalidCommand {
            details: format!("Unknown command '{}', expected publish, ranking or health", other),
        }),
    }
}

#[async_trait::async_trait]
impl CommandHandler for CliAdapter {
    #[instrument]
    async fn handle(&self, command: Command) -> error_stack::Result<String, CommandError> {
        match command {
            Command::PublishReport => {
                let routine = &self.services.report_routine;
                routine
                    .run()
                    .await
                    .map_err(|e| CommandError::ExecutionFailed {
                        details: format!("Failed to run routine {}: {:?}", routine.name(), e),
                    })?;

                Ok(format!("✅ Routine '{}' completed successfully", routine.name()))
            }
            Command::ShowRanking => {
                let projects = self
                    .services
                    .repository
                    .fully_funded_by_duration()
                    .await
                    .map_err(|e| CommandError::ExecutionFailed {
                        details: format!("Failed to load ranking: {:?}", e),
                    })?;

                let mut output = format!("\nFully invested projects: {}\n", projects.len());
                for (position, project) in projects.iter().enumerate() {
                    let elapsed = project
                        .collection_time()
                        .map(format_elapsed)
                        .unwrap_or_else(|| "-".to_string());
                    output.push_str(&format!(
                        "{:>3}. {} ({})\n",
                        position + 1,
                        project.name,
                        elapsed
                    ));
                }

                Ok(output)
            }
            Command::HealthCheck => {
                let projects = self
                    .services
                    .repository
                    .fully_funded_by_duration()
                    .await
                    .map_err(|e| CommandError::ExecutionFailed {
                        details: format!("Health check failed: {:?}", e),
                    })?;

                Ok(format!(
                    "🟢 Charity Report Service - Healthy\n\
                     Fully invested projects: {}",
                    projects.len()
                ))
            }
        }
    }
}
