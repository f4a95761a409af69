use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::{
        capability::{CollectorWaiter, CommandResponder},
        command::string_option,
    },
    error::AppError,
    service::{AskService, KnowledgeService},
};

pub const NAME: &str = "ask-me";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Ask me anything and if i dont know it, teach me")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "question", "Your question")
                .required(true),
        )
}

pub async fn run(
    knowledge: &KnowledgeService,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let question = string_option(command, "question").unwrap_or_default();

    let responder = CommandResponder::new(ctx, command);
    let waiter = CollectorWaiter::new(ctx);

    let outcome = AskService::new(knowledge)
        .ask(&question, command.user.id.get(), &responder, &waiter)
        .await?;

    tracing::debug!("Answered /{} for user {}: {:?}", NAME, command.user.id, outcome);

    Ok(())
}
