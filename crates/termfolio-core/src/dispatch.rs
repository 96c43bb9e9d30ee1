//! Single-line command dispatch.
//!
//! Tokenizes one input line, resolves the command in the registry, applies
//! the admin gate, and routes to the handler. Interactive flows are armed
//! here but fed by [`crate::flow`]; the interpreter decides which of the
//! two gets the line.

use chrono::Local;

use crate::auth::SignInResult;
use crate::command::{find_command, visible_commands, CommandCategory};
use crate::error::TermError;
use crate::flow::FlowState;
use crate::interpreter::SessionContext;
use crate::output::{Block, CommandResult, Output, OutputKind};
use crate::portfolio::{portfolio, BANNER};
use crate::theme::{available_themes, Theme};
use crate::vfs;

/// Executes one non-flow input line.
///
/// `current_path` is owned by the caller; navigation is reported back
/// through [`CommandResult::new_path`] rather than mutated here.
pub fn execute(
    input: &str,
    current_path: &str,
    is_admin: bool,
    ctx: &mut SessionContext,
) -> CommandResult {
    let args: Vec<&str> = input.split_whitespace().collect();
    let Some(first) = args.first() else {
        return CommandResult::empty();
    };
    let name = first.to_lowercase();

    let Some(command) = find_command(&name) else {
        return CommandResult::error(TermError::command_not_found(name));
    };

    if command.requires_admin && !is_admin {
        return CommandResult::error(TermError::PermissionDenied);
    }

    tracing::debug!(command = command.name, "dispatching");

    match command.name {
        "help" => handle_help(is_admin),
        "clear" => CommandResult::clear(),
        "ls" => handle_ls(current_path, args.get(1).copied(), ctx),
        "pwd" => CommandResult::text(current_path),
        "cd" => handle_cd(current_path, args.get(1).copied(), ctx),
        "cat" => handle_cat(current_path, args.get(1).copied(), ctx),
        "open" => handle_open(current_path, args.get(1).copied(), ctx),
        "theme" => handle_theme(&args, ctx),
        "themes" => CommandResult::from_output(theme_list_output()),
        "whoami" => handle_whoami(ctx),
        "login" => handle_login(args.get(1).copied(), args.get(2).copied(), ctx),
        "logout" => handle_logout(ctx),
        "date" => handle_date(),
        "banner" => CommandResult::from_output(Output::new(
            OutputKind::Normal,
            vec![Block::Preformatted(BANNER.to_string())],
        )),
        "exit" => CommandResult::text("Closing terminal...").closing_terminal(),
        "add" => handle_add(args.get(1).copied(), &args[1..], ctx),
        "edit" => handle_edit(args.get(1).copied(), &args[1..], ctx),
        "delete" => handle_delete(args.get(1).copied(), &args[1..], ctx),
        "matrix" => CommandResult::from_output(Output::system(
            "Starting Matrix mode...\n\nJust kidding! But that would be cool, right?",
        )),
        "sudo" => handle_sudo(args.get(1).copied()),
        other => CommandResult::error(TermError::command_not_found(other)),
    }
}

fn usage_line(usage: &str, description: &str) -> String {
    format!("{usage} - {description}")
}

fn handle_help(is_admin: bool) -> CommandResult {
    let visible = visible_commands(is_admin);
    let lines_for = |category: CommandCategory| -> Vec<String> {
        visible
            .iter()
            .filter(|c| c.category == category)
            .map(|c| usage_line(c.usage, c.description))
            .collect()
    };

    let mut blocks = vec![
        Block::Heading(CommandCategory::Core.heading().to_string()),
        Block::Items(lines_for(CommandCategory::Core)),
        Block::Heading(CommandCategory::Extended.heading().to_string()),
        Block::Items(lines_for(CommandCategory::Extended)),
    ];

    if is_admin {
        blocks.push(Block::Heading(CommandCategory::Admin.heading().to_string()));
        blocks.push(Block::Items(lines_for(CommandCategory::Admin)));
    } else {
        blocks.push(Block::Items(vec![
            "login admin - Log in as admin".to_string()
        ]));
    }

    blocks.push(Block::Heading(
        CommandCategory::EasterEgg.heading().to_string(),
    ));
    blocks.push(Block::Text(
        "Try to find them! Hint: Try matrix or sudo hire-me".to_string(),
    ));

    CommandResult::from_output(Output::new(OutputKind::Normal, blocks))
}

fn handle_ls(current_path: &str, target: Option<&str>, ctx: &SessionContext) -> CommandResult {
    let path = vfs::resolve_path(current_path, target.unwrap_or(""));
    match vfs::list_entries(&path, &ctx.store) {
        Ok(entries) => {
            if entries.is_empty() {
                return CommandResult::text("No projects found.");
            }
            CommandResult::from_output(Output::new(
                OutputKind::Normal,
                vec![Block::Listing(entries)],
            ))
        }
        Err(_) => CommandResult::error("Directory not found."),
    }
}

fn handle_cd(current_path: &str, target: Option<&str>, ctx: &SessionContext) -> CommandResult {
    let Some(target) = target else {
        // bare `cd` returns to the root
        return CommandResult::empty().with_new_path(vfs::ROOT);
    };

    let new_path = vfs::resolve_path(current_path, target);
    if vfs::is_valid_path(&new_path, &ctx.store) {
        CommandResult::empty().with_new_path(new_path)
    } else {
        // the error names the argument as typed, not the resolved path
        CommandResult::error(TermError::no_such_directory(target))
    }
}

fn handle_cat(current_path: &str, file: Option<&str>, ctx: &SessionContext) -> CommandResult {
    let Some(file) = file else {
        return CommandResult::error("Usage: cat <filename>");
    };

    let data = portfolio();
    let path = vfs::normalize_path(current_path);

    if let Some(id) = vfs::project_id_of(&path) {
        if let Some(project) = ctx.store.get(id) {
            match file {
                "info.txt" => {
                    return CommandResult::from_output(Output::new(
                        OutputKind::Normal,
                        vec![
                            Block::Heading(project.name.clone()),
                            Block::Fields(vec![
                                ("Project ID".to_string(), project.id.clone()),
                                ("Created".to_string(), project.date.clone()),
                            ]),
                            Block::Text(project.description.clone()),
                            Block::Heading("Technologies".to_string()),
                            Block::Tags(project.technologies.clone()),
                            Block::Link {
                                label: "Live Demo".to_string(),
                                url: project.demo_url.clone(),
                            },
                            Block::Link {
                                label: "Source Code".to_string(),
                                url: project.source_url.clone(),
                            },
                            Block::Text(
                                "Type 'cat image.jpg' to view project image".to_string(),
                            ),
                        ],
                    ));
                }
                "image.jpg" => {
                    return CommandResult::from_output(Output::new(
                        OutputKind::Normal,
                        vec![
                            Block::Heading(format!("{} - Preview", project.name)),
                            Block::Image {
                                alt: project.name.clone(),
                                src: project.image.clone(),
                            },
                            Block::Link {
                                label: "Visit live project".to_string(),
                                url: project.demo_url.clone(),
                            },
                        ],
                    ));
                }
                _ => {}
            }
        }
        return CommandResult::error(TermError::no_such_file(file));
    }

    let blocks = match (path.as_str(), file) {
        ("/about", "info.txt") => vec![
            Block::Heading(format!("{} - {}", data.about.name, data.about.title)),
            Block::Text(data.about.summary.to_string()),
        ],
        ("/about", "experience.txt") => {
            let mut blocks = vec![Block::Heading("Professional Experience".to_string())];
            for exp in &data.about.experience {
                blocks.push(Block::Text(format!(
                    "{} at {}\n{}\n{}",
                    exp.role, exp.company, exp.period, exp.description
                )));
            }
            blocks
        }
        ("/about", "education.txt") => {
            let mut blocks = vec![Block::Heading("Education".to_string())];
            for edu in &data.about.education {
                blocks.push(Block::Text(format!(
                    "{}\n{} ({})",
                    edu.degree, edu.institution, edu.year
                )));
            }
            blocks
        }
        ("/skills", "technical.txt") => vec![
            Block::Heading("Technical Skills".to_string()),
            Block::Tags(data.skills.technical.iter().map(|s| s.to_string()).collect()),
        ],
        ("/skills", "soft.txt") => vec![
            Block::Heading("Soft Skills".to_string()),
            Block::Tags(data.skills.soft.iter().map(|s| s.to_string()).collect()),
        ],
        ("/skills", "tools.txt") => vec![
            Block::Heading("Tools & Technologies".to_string()),
            Block::Tags(data.skills.tools.iter().map(|s| s.to_string()).collect()),
        ],
        ("/contact", "email.txt") => vec![
            Block::Heading("Email Contact".to_string()),
            Block::Link {
                label: data.contact.email.to_string(),
                url: format!("mailto:{}", data.contact.email),
            },
        ],
        ("/contact", "social.txt") => vec![
            Block::Heading("Social Media".to_string()),
            Block::Fields(
                data.contact
                    .social
                    .iter()
                    .map(|(platform, url)| (platform.to_string(), url.to_string()))
                    .collect(),
            ),
        ],
        _ => return CommandResult::error(TermError::no_such_file(file)),
    };

    CommandResult::from_output(Output::new(OutputKind::Normal, blocks))
}

fn handle_open(current_path: &str, target: Option<&str>, ctx: &SessionContext) -> CommandResult {
    let Some(target) = target else {
        return CommandResult::error("Usage: open <file/project>");
    };

    let path = vfs::normalize_path(current_path);

    if let Some(id) = vfs::project_id_of(&path) {
        if let Some(project) = ctx.store.get(id) {
            match target {
                "demo.link" if !project.demo_url.is_empty() => {
                    return CommandResult::from_output(Output::new(
                        OutputKind::Normal,
                        vec![
                            Block::Heading("Opening Demo".to_string()),
                            Block::Text(format!("Opening demo for {}...", project.name)),
                            Block::Link {
                                label: "Open Demo".to_string(),
                                url: project.demo_url.clone(),
                            },
                        ],
                    ));
                }
                "source.link" if !project.source_url.is_empty() => {
                    return CommandResult::from_output(Output::new(
                        OutputKind::Normal,
                        vec![
                            Block::Heading("Opening Source Code".to_string()),
                            Block::Text(format!("Opening source code for {}...", project.name)),
                            Block::Link {
                                label: "View Source Code".to_string(),
                                url: project.source_url.clone(),
                            },
                        ],
                    ));
                }
                _ => {}
            }
        }
    }

    if path == "/contact" && target == "form.link" {
        return CommandResult::from_output(Output::new(
            OutputKind::Normal,
            vec![
                Block::Heading("Contact Form".to_string()),
                Block::Text("Opening contact form...".to_string()),
                Block::Link {
                    label: "Go to Contact Form".to_string(),
                    url: "#contact".to_string(),
                },
            ],
        ));
    }

    CommandResult::error(TermError::no_such_link(target))
}

fn theme_list_output() -> Output {
    use strum::IntoEnumIterator;

    Output::new(
        OutputKind::Normal,
        vec![
            Block::Heading("Available Themes".to_string()),
            Block::Fields(
                Theme::iter()
                    .map(|t| (t.title().to_string(), t.description().to_string()))
                    .collect(),
            ),
        ],
    )
}

fn handle_theme(args: &[&str], ctx: &mut SessionContext) -> CommandResult {
    match args.get(1).copied() {
        Some("ls") | Some("list") => CommandResult::from_output(theme_list_output()),
        Some("set") => handle_theme_set(args.get(2).copied(), ctx),
        _ => CommandResult::error("Usage: theme ls | theme set <name>"),
    }
}

fn handle_theme_set(name: Option<&str>, ctx: &mut SessionContext) -> CommandResult {
    let Some(name) = name else {
        return CommandResult::error("Usage: theme set <name>");
    };

    match name.parse::<Theme>() {
        Ok(theme) => {
            ctx.theme = theme;
            if let Err(err) = ctx.theme_cache.save(theme) {
                tracing::warn!(error = %err, "theme cache write failed");
            }
            CommandResult::text(format!(
                "Theme set to {theme}. The entire portfolio will now use this theme."
            ))
        }
        Err(_) => CommandResult::error(format!(
            "Invalid theme: {name}. Available themes: {}",
            available_themes()
        )),
    }
}

fn handle_whoami(ctx: &mut SessionContext) -> CommandResult {
    match ctx.auth.current_user() {
        Some(user) => CommandResult::from_output(Output::new(
            OutputKind::Normal,
            vec![
                Block::Heading("User Information".to_string()),
                Block::Fields(vec![
                    ("Name".to_string(), user.name),
                    ("Email".to_string(), user.email),
                    ("Role".to_string(), user.role.to_string()),
                ]),
            ],
        )),
        None => CommandResult::text("guest"),
    }
}

fn handle_login(
    username: Option<&str>,
    password: Option<&str>,
    ctx: &mut SessionContext,
) -> CommandResult {
    let (Some(username), Some(password)) = (username, password) else {
        return CommandResult::error("Usage: login <username> <password>");
    };

    let SignInResult { success, .. } = ctx.auth.sign_in(username, password);
    if success {
        CommandResult::from_output(Output::success(vec![
            Block::Heading("Access Granted".to_string()),
            Block::Text(
                "Admin access granted. You now have access to admin commands.".to_string(),
            ),
            Block::Text("Type 'help' to see available admin commands.".to_string()),
        ]))
        .with_admin_status(true)
    } else {
        CommandResult::from_output(Output::new(
            OutputKind::Error,
            vec![
                Block::Heading("Access Denied".to_string()),
                Block::Text("Invalid credentials. Access denied.".to_string()),
            ],
        ))
    }
}

fn handle_logout(ctx: &mut SessionContext) -> CommandResult {
    ctx.auth.sign_out();
    CommandResult::from_output(Output::info(vec![
        Block::Heading("Logged Out".to_string()),
        Block::Text("You have been successfully logged out.".to_string()),
    ]))
    .with_admin_status(false)
}

fn handle_date() -> CommandResult {
    let now = Local::now();
    CommandResult::text(now.format("%A, %B %-d, %Y, %I:%M:%S %p %:z").to_string())
}

fn rest_name(rest: &[&str]) -> String {
    let name = rest.iter().skip(1).copied().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        "Unnamed".to_string()
    } else {
        name
    }
}

fn handle_add(kind: Option<&str>, rest: &[&str], ctx: &mut SessionContext) -> CommandResult {
    let Some(kind) = kind else {
        return CommandResult::error("Usage: add <type> <name>");
    };

    if kind.eq_ignore_ascii_case("project") {
        ctx.flow = FlowState::adding();
        return CommandResult::from_output(Output::info(vec![
            Block::Heading("Add New Project".to_string()),
            Block::Text("You'll be guided through creating a new project.".to_string()),
            Block::Text("Type 'cancel' at any point to abort.".to_string()),
        ]));
    }

    CommandResult::from_output(Output::success(vec![
        Block::Heading("Item Added".to_string()),
        Block::Text(format!("Added new {kind}: {}", rest_name(rest))),
        Block::Text(
            "(This is a simulation - in a real app, this would add to your database)".to_string(),
        ),
    ]))
}

fn handle_edit(kind: Option<&str>, rest: &[&str], ctx: &mut SessionContext) -> CommandResult {
    let Some(kind) = kind else {
        return CommandResult::error("Usage: edit <type> <name>");
    };

    if kind.eq_ignore_ascii_case("project") {
        ctx.flow = FlowState::editing();
        return CommandResult::from_output(Output::info(vec![
            Block::Heading("Edit Project".to_string()),
            Block::Text("You'll be guided through editing a project.".to_string()),
            Block::Text(format!(
                "Available projects: {}",
                ctx.store.ids().join(", ")
            )),
            Block::Text("Type 'cancel' at any point to abort.".to_string()),
        ]));
    }

    CommandResult::from_output(Output::info(vec![
        Block::Heading("Item Edited".to_string()),
        Block::Text(format!("Edited {kind}: {}", rest_name(rest))),
        Block::Text(
            "(This is a simulation - in a real app, this would open an editor)".to_string(),
        ),
    ]))
}

fn handle_delete(kind: Option<&str>, rest: &[&str], ctx: &mut SessionContext) -> CommandResult {
    let Some(kind) = kind else {
        return CommandResult::error("Usage: delete <type> <name>");
    };

    if kind.eq_ignore_ascii_case("project") {
        ctx.flow = FlowState::deleting();
        return CommandResult::from_output(Output::warning(vec![
            Block::Heading("Delete Project".to_string()),
            Block::Text("You'll be guided through deleting a project.".to_string()),
            Block::Text(format!(
                "Available projects: {}",
                ctx.store.ids().join(", ")
            )),
            Block::Text("Type 'cancel' at any point to abort.".to_string()),
        ]));
    }

    CommandResult::from_output(Output::warning(vec![
        Block::Heading("Item Deleted".to_string()),
        Block::Text(format!("Deleted {kind}: {}", rest_name(rest))),
        Block::Text(
            "(This is a simulation - in a real app, this would remove from your database)"
                .to_string(),
        ),
    ]))
}

fn handle_sudo(arg: Option<&str>) -> CommandResult {
    let message = if arg == Some("hire-me") {
        "Excellent choice! Sending job offer...\n\nJust kidding, but I am available for work! Check out my contact info."
    } else {
        "Permission denied: Nice try!"
    };
    CommandResult::from_output(Output::system(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> SessionContext {
        SessionContext::in_memory()
    }

    fn run(input: &str, path: &str, is_admin: bool, ctx: &mut SessionContext) -> CommandResult {
        execute(input, path, is_admin, ctx)
    }

    #[test]
    fn test_empty_input_is_noop() {
        let mut ctx = ctx();
        let result = run("   ", "/", false, &mut ctx);
        assert!(result.output.is_empty());
        assert!(!result.is_error());
    }

    #[test]
    fn test_unknown_command_errors() {
        let mut ctx = ctx();
        let result = run("frobnicate", "/", false, &mut ctx);
        assert!(result.is_error());
        assert_eq!(result.output.plain_text(), "command not found: frobnicate");
    }

    #[test]
    fn test_command_name_is_case_insensitive() {
        let mut ctx = ctx();
        let result = run("PWD", "/skills", false, &mut ctx);
        assert_eq!(result.output.plain_text(), "/skills");
    }

    #[test]
    fn test_admin_gate_rejects_guests_before_routing() {
        let mut ctx = ctx();
        for input in ["add project", "edit project", "delete project", "logout"] {
            let result = run(input, "/", false, &mut ctx);
            assert!(result.is_error(), "{input}");
            assert_eq!(
                result.output.plain_text(),
                "Permission denied: Admin access required."
            );
            assert!(ctx.flow.is_idle(), "{input} must not arm a flow");
        }
    }

    #[test]
    fn test_help_hides_admin_commands_from_guests() {
        let mut ctx = ctx();
        let guest = run("help", "/", false, &mut ctx).output.plain_text();
        assert!(!guest.contains("ADMIN COMMANDS:"));
        assert!(guest.contains("login admin"));
        assert!(guest.contains("EASTER EGGS:"));

        let admin = run("help", "/", true, &mut ctx).output.plain_text();
        assert!(admin.contains("ADMIN COMMANDS:"));
        assert!(admin.contains("delete project"));
    }

    #[test]
    fn test_cd_without_argument_goes_to_root() {
        let mut ctx = ctx();
        let result = run("cd", "/projects", false, &mut ctx);
        assert_eq!(result.new_path.as_deref(), Some("/"));
    }

    #[test]
    fn test_cd_reports_the_raw_argument_on_error() {
        let mut ctx = ctx();
        let result = run("cd nowhere", "/about", false, &mut ctx);
        assert!(result.is_error());
        assert_eq!(
            result.output.plain_text(),
            "cd: nowhere: No such directory"
        );
        assert!(result.new_path.is_none());
    }

    #[test]
    fn test_cd_into_project_and_back_up() {
        let mut ctx = ctx();
        let id = ctx.store.ids()[0].clone();
        let result = run(&format!("cd projects/{id}"), "/", false, &mut ctx);
        assert_eq!(result.new_path.as_deref(), Some(&*format!("/projects/{id}")));

        let result = run("cd ..", &format!("/projects/{id}"), false, &mut ctx);
        assert_eq!(result.new_path.as_deref(), Some("/projects"));
    }

    #[test]
    fn test_ls_lists_root_sections() {
        let mut ctx = ctx();
        let result = run("ls", "/", false, &mut ctx);
        let text = result.output.plain_text();
        for section in ["about", "projects", "skills", "contact"] {
            assert!(text.contains(section), "{section}");
        }
    }

    #[test]
    fn test_ls_unknown_directory() {
        let mut ctx = ctx();
        let result = run("ls /missing", "/", false, &mut ctx);
        assert!(result.is_error());
        assert_eq!(result.output.plain_text(), "Directory not found.");
    }

    #[test]
    fn test_cat_requires_filename() {
        let mut ctx = ctx();
        let result = run("cat", "/about", false, &mut ctx);
        assert_eq!(result.output.plain_text(), "Usage: cat <filename>");
    }

    #[test]
    fn test_cat_about_info() {
        let mut ctx = ctx();
        let result = run("cat info.txt", "/about", false, &mut ctx);
        assert!(!result.is_error());
        assert!(result.output.plain_text().contains(portfolio().about.name));
    }

    #[test]
    fn test_cat_only_matches_current_directory() {
        let mut ctx = ctx();
        let result = run("cat technical.txt", "/about", false, &mut ctx);
        assert!(result.is_error());
        assert_eq!(
            result.output.plain_text(),
            "cat: technical.txt: No such file"
        );
    }

    #[test]
    fn test_cat_project_info_reads_store() {
        let mut ctx = ctx();
        let id = ctx.store.ids()[0].clone();
        let name = ctx.store.get(&id).unwrap().name.clone();
        let result = run("cat info.txt", &format!("/projects/{id}"), false, &mut ctx);
        assert!(result.output.plain_text().contains(&name));
    }

    #[test]
    fn test_open_targets() {
        let mut ctx = ctx();
        let id = ctx.store.ids()[0].clone();
        let path = format!("/projects/{id}");

        let demo = run("open demo.link", &path, false, &mut ctx);
        assert!(demo.output.plain_text().contains("Opening demo for"));

        let form = run("open form.link", "/contact", false, &mut ctx);
        assert!(form.output.plain_text().contains("Contact Form"));

        let missing = run("open demo.link", "/about", false, &mut ctx);
        assert!(missing.is_error());
        assert_eq!(
            missing.output.plain_text(),
            "open: demo.link: No such file or link"
        );
    }

    #[test]
    fn test_theme_set_and_usage() {
        let mut ctx = ctx();
        let result = run("theme set nord", "/", false, &mut ctx);
        assert_eq!(ctx.theme, Theme::Nord);
        assert!(result.output.plain_text().starts_with("Theme set to nord."));

        let result = run("theme set neon", "/", false, &mut ctx);
        assert!(result.is_error());
        assert!(result.output.plain_text().contains("Invalid theme: neon."));
        assert_eq!(ctx.theme, Theme::Nord);

        let result = run("theme", "/", false, &mut ctx);
        assert_eq!(
            result.output.plain_text(),
            "Usage: theme ls | theme set <name>"
        );
    }

    #[test]
    fn test_themes_alias_lists_all() {
        let mut ctx = ctx();
        let result = run("themes", "/", false, &mut ctx);
        let text = result.output.plain_text();
        assert!(text.contains("Available Themes"));
        assert!(text.contains("Dracula"));
    }

    #[test]
    fn test_whoami_guest_and_admin() {
        let mut ctx = ctx();
        let result = run("whoami", "/", false, &mut ctx);
        assert_eq!(result.output.plain_text(), "guest");

        ctx.auth.sign_in("admin", "admin123");
        let result = run("whoami", "/", true, &mut ctx);
        let text = result.output.plain_text();
        assert!(text.contains("Admin User"));
        assert!(text.contains("admin@example.com"));
    }

    #[test]
    fn test_login_success_and_failure() {
        let mut ctx = ctx();
        let result = run("login admin admin123", "/", false, &mut ctx);
        assert_eq!(result.admin_status, Some(true));
        assert!(result.output.plain_text().contains("Access Granted"));

        let result = run("login admin nope", "/", false, &mut ctx);
        assert!(result.is_error());
        assert!(result.admin_status.is_none());
        assert!(result.output.plain_text().contains("Access Denied"));

        let result = run("login admin", "/", false, &mut ctx);
        assert_eq!(
            result.output.plain_text(),
            "Usage: login <username> <password>"
        );
    }

    #[test]
    fn test_logout_clears_session() {
        let mut ctx = ctx();
        ctx.auth.sign_in("admin", "admin123");
        let result = run("logout", "/", true, &mut ctx);
        assert_eq!(result.admin_status, Some(false));
        assert!(!ctx.auth.is_admin());
    }

    #[test]
    fn test_add_project_arms_flow() {
        let mut ctx = ctx();
        let result = run("add project", "/", true, &mut ctx);
        assert!(!result.is_error());
        assert!(!ctx.flow.is_idle());
        assert!(result.output.plain_text().contains("Add New Project"));
    }

    #[test]
    fn test_add_non_project_is_simulated() {
        let mut ctx = ctx();
        let result = run("add skill Rust macros", "/", true, &mut ctx);
        assert!(ctx.flow.is_idle());
        let text = result.output.plain_text();
        assert!(text.contains("Added new skill: Rust macros"));
        assert!(text.contains("This is a simulation"));
    }

    #[test]
    fn test_delete_without_type_shows_usage() {
        let mut ctx = ctx();
        let result = run("delete", "/", true, &mut ctx);
        assert_eq!(result.output.plain_text(), "Usage: delete <type> <name>");
    }

    #[test]
    fn test_exit_requests_close() {
        let mut ctx = ctx();
        let result = run("exit", "/", false, &mut ctx);
        assert!(result.close_terminal);
        assert_eq!(result.output.plain_text(), "Closing terminal...");
    }

    #[test]
    fn test_sudo_hire_me() {
        let mut ctx = ctx();
        let result = run("sudo hire-me", "/", false, &mut ctx);
        assert!(result.output.plain_text().contains("Excellent choice!"));
        assert_eq!(result.output.kind, OutputKind::System);

        let result = run("sudo rm -rf /", "/", false, &mut ctx);
        assert_eq!(result.output.plain_text(), "Permission denied: Nice try!");
    }
}
