//! Static storage for the command catalog (initialized once).

use std::sync::OnceLock;

use super::model::{CommandCategory, CommandDefinition};

static COMMANDS: OnceLock<Vec<CommandDefinition>> = OnceLock::new();

/// Returns every registered command.
///
/// The catalog is initialized on first access and cached for subsequent
/// calls.
pub fn all_commands() -> &'static [CommandDefinition] {
    COMMANDS.get_or_init(|| {
        vec![
            CommandDefinition {
                name: "help",
                description: "Show available commands",
                usage: "help",
                category: CommandCategory::Core,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "clear",
                description: "Clear the terminal",
                usage: "clear",
                category: CommandCategory::Core,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "ls",
                description: "List directory contents",
                usage: "ls [path]",
                category: CommandCategory::Core,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "pwd",
                description: "Print working directory",
                usage: "pwd",
                category: CommandCategory::Core,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "whoami",
                description: "Display current user info",
                usage: "whoami",
                category: CommandCategory::Core,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "login",
                description: "Login as admin",
                usage: "login <username> <password>",
                category: CommandCategory::Core,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "logout",
                description: "Logout from admin session",
                usage: "logout",
                category: CommandCategory::Core,
                requires_admin: true,
                aliases: &[],
            },
            CommandDefinition {
                name: "theme",
                description: "Change terminal theme",
                usage: "theme ls | theme set <name>",
                category: CommandCategory::Core,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "themes",
                description: "List available themes",
                usage: "themes",
                category: CommandCategory::Core,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "date",
                description: "Display current date and time",
                usage: "date",
                category: CommandCategory::Core,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "banner",
                description: "Display the welcome banner",
                usage: "banner",
                category: CommandCategory::Core,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "exit",
                description: "Close the terminal",
                usage: "exit",
                category: CommandCategory::Core,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "cd",
                description: "Change directory",
                usage: "cd [path]",
                category: CommandCategory::Extended,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "cat",
                description: "Display file contents",
                usage: "cat <file>",
                category: CommandCategory::Extended,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "open",
                description: "Open a link or image",
                usage: "open <target>",
                category: CommandCategory::Extended,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "add",
                description: "Add new content",
                usage: "add project",
                category: CommandCategory::Admin,
                requires_admin: true,
                aliases: &[],
            },
            CommandDefinition {
                name: "edit",
                description: "Edit existing content",
                usage: "edit project",
                category: CommandCategory::Admin,
                requires_admin: true,
                aliases: &[],
            },
            CommandDefinition {
                name: "delete",
                description: "Delete content",
                usage: "delete project",
                category: CommandCategory::Admin,
                requires_admin: true,
                aliases: &[],
            },
            CommandDefinition {
                name: "matrix",
                description: "Enter the matrix",
                usage: "matrix",
                category: CommandCategory::EasterEgg,
                requires_admin: false,
                aliases: &[],
            },
            CommandDefinition {
                name: "sudo",
                description: "Run a command as superuser",
                usage: "sudo <command>",
                category: CommandCategory::EasterEgg,
                requires_admin: false,
                aliases: &[],
            },
        ]
    })
}

/// Looks a command up by exact name, then by alias.
pub fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    all_commands()
        .iter()
        .find(|c| c.name == name)
        .or_else(|| all_commands().iter().find(|c| c.aliases.contains(&name)))
}

/// The commands of one category, in registration order.
pub fn commands_by_category(category: CommandCategory) -> Vec<&'static CommandDefinition> {
    all_commands()
        .iter()
        .filter(|c| c.category == category)
        .collect()
}

/// The commands a user may see in `help`: everything, minus the admin
/// category when not signed in.
pub fn visible_commands(is_admin: bool) -> Vec<&'static CommandDefinition> {
    all_commands()
        .iter()
        .filter(|c| is_admin || !c.requires_admin)
        .collect()
}
