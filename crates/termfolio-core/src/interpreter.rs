//! The outer interpreter: owns session state and routes each input line
//! to either the armed interactive flow or the command dispatcher.

use crate::auth::AuthService;
use crate::dispatch;
use crate::flow::FlowState;
use crate::output::CommandResult;
use crate::project::ProjectStore;
use crate::theme::{NullThemeCache, Theme, ThemeCache};
use crate::vfs;

/// Everything a command handler may touch, passed explicitly.
pub struct SessionContext {
    pub store: ProjectStore,
    pub auth: AuthService,
    pub flow: FlowState,
    pub theme: Theme,
    pub theme_cache: Box<dyn ThemeCache>,
}

impl SessionContext {
    pub fn new(
        store: ProjectStore,
        auth: AuthService,
        theme: Theme,
        theme_cache: Box<dyn ThemeCache>,
    ) -> Self {
        Self {
            store,
            auth,
            flow: FlowState::Idle,
            theme,
            theme_cache,
        }
    }

    /// A context with no durable caches, for tests and ephemeral sessions.
    pub fn in_memory() -> Self {
        Self::new(
            ProjectStore::in_memory(),
            AuthService::in_memory(),
            Theme::default(),
            Box::new(NullThemeCache),
        )
    }
}

/// One terminal session: context plus the cursor state the shell shows.
pub struct Interpreter {
    ctx: SessionContext,
    current_path: String,
    is_admin: bool,
}

impl Interpreter {
    pub fn new(mut ctx: SessionContext) -> Self {
        // a persisted admin session survives restarts until it expires
        let is_admin = ctx.auth.is_admin();
        Self {
            ctx,
            current_path: vfs::ROOT.to_string(),
            is_admin,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(SessionContext::in_memory())
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn theme(&self) -> Theme {
        self.ctx.theme
    }

    /// True while an interactive flow is waiting for input.
    pub fn in_flow(&self) -> bool {
        !self.ctx.flow.is_idle()
    }

    /// The armed flow's prompt, when one is waiting.
    pub fn flow_prompt(&self) -> Option<String> {
        self.ctx.flow.prompt()
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    /// Handles one input line.
    ///
    /// A line is either fed to the armed flow or dispatched as a command;
    /// never both. Returns every result the line produced, in order.
    pub fn handle_line(&mut self, input: &str) -> Vec<CommandResult> {
        if !self.ctx.flow.is_idle() {
            let SessionContext { store, flow, .. } = &mut self.ctx;
            let mut results = Vec::new();
            flow.step(input, store, &mut |output| {
                results.push(CommandResult::from_output(output));
            });
            return results;
        }

        // admin status may have lapsed since the last line
        self.is_admin = self.ctx.auth.is_admin();

        let result = dispatch::execute(input, &self.current_path, self.is_admin, &mut self.ctx);
        if let Some(path) = &result.new_path {
            self.current_path.clone_from(path);
        }
        if let Some(is_admin) = result.admin_status {
            self.is_admin = is_admin;
        }
        vec![result]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputKind;

    fn last_text(results: &[CommandResult]) -> String {
        results
            .last()
            .map(|r| r.output.plain_text())
            .unwrap_or_default()
    }

    #[test]
    fn test_navigation_updates_path() {
        let mut term = Interpreter::in_memory();
        assert_eq!(term.current_path(), "/");

        term.handle_line("cd skills");
        assert_eq!(term.current_path(), "/skills");

        term.handle_line("cd bogus");
        assert_eq!(term.current_path(), "/skills", "failed cd keeps the path");

        term.handle_line("cd");
        assert_eq!(term.current_path(), "/");
    }

    #[test]
    fn test_login_and_logout_toggle_admin() {
        let mut term = Interpreter::in_memory();
        assert!(!term.is_admin());

        term.handle_line("login admin admin123");
        assert!(term.is_admin());

        term.handle_line("logout");
        assert!(!term.is_admin());
    }

    #[test]
    fn test_add_project_end_to_end() {
        let mut term = Interpreter::in_memory();
        term.handle_line("login admin admin123");

        let results = term.handle_line("add project");
        assert!(term.in_flow());
        assert!(last_text(&results).contains("Add New Project"));
        assert_eq!(
            term.flow_prompt().as_deref(),
            Some("project name (must not be empty):")
        );

        term.handle_line("Foo");
        term.handle_line("A test project");
        term.handle_line("React, Node");
        term.handle_line("https://example.com/src");
        term.handle_line("https://example.com/demo");
        let results = term.handle_line("default");

        assert!(!term.in_flow());
        assert_eq!(results.last().unwrap().output.kind, OutputKind::Success);

        let store = &term.context().store;
        let id = store
            .ids()
            .into_iter()
            .find(|id| id.starts_with("foo-"))
            .expect("created project");
        let project = store.get(&id).unwrap();
        assert_eq!(project.name, "Foo");
        assert_eq!(project.technologies, ["React", "Node"]);
    }

    #[test]
    fn test_flow_consumes_command_like_input() {
        let mut term = Interpreter::in_memory();
        term.handle_line("login admin admin123");
        term.handle_line("add project");

        // inside a flow, "help" is a project name, not a command
        term.handle_line("help");
        assert!(term.in_flow());
        assert_eq!(
            term.flow_prompt().as_deref(),
            Some("project description (must not be empty):")
        );
        term.handle_line("cancel");
        assert!(!term.in_flow());
    }

    #[test]
    fn test_deleted_project_invalidates_current_path_target() {
        let mut term = Interpreter::in_memory();
        term.handle_line("login admin admin123");
        let id = term.context().store.ids()[0].clone();

        term.handle_line("delete project");
        term.handle_line(&id);
        term.handle_line("yes");
        assert!(term.context().store.get(&id).is_none());

        let results = term.handle_line(&format!("cd projects/{id}"));
        assert!(results[0].is_error());
    }

    #[test]
    fn test_theme_selection_is_session_state() {
        let mut term = Interpreter::in_memory();
        assert_eq!(term.theme(), Theme::Dracula);
        term.handle_line("theme set hacker");
        assert_eq!(term.theme(), Theme::Hacker);
    }

    #[test]
    fn test_clear_passes_through_as_sentinel() {
        let mut term = Interpreter::in_memory();
        let results = term.handle_line("clear");
        assert!(results[0].is_clear());
    }
}
