//! Interactive multi-step flows for `add`, `edit`, and `delete project`.
//!
//! While a flow is armed, every input line is routed here instead of the
//! dispatcher. Each step validates its input, emits any output through the
//! caller's sink, and either advances (re-prompting via [`StepOutcome`]) or
//! finishes. `cancel` aborts any flow from any step.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::TermError;
use crate::output::{Block, Output};
use crate::project::{slugify, Project, ProjectDraft, ProjectPatch, ProjectStore};

/// An editable project field, named as the user types it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectField {
    Name,
    Description,
    Technologies,
    SourceUrl,
    DemoUrl,
    Image,
}

/// "name, description, ..." for the field prompt and its error message.
pub fn valid_fields() -> String {
    let names: Vec<String> = ProjectField::iter().map(|f| f.to_string()).collect();
    names.join(", ")
}

/// Position in the add flow. Steps run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStep {
    Name,
    Description,
    Technologies,
    SourceUrl,
    DemoUrl,
    Image,
}

/// Position in the edit flow; later steps carry what earlier steps chose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStep {
    SelectProject,
    SelectField { id: String },
    EditField { id: String, field: ProjectField },
}

/// Position in the delete flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteStep {
    SelectProject,
    Confirm { target: Project },
}

/// The armed flow, if any. One flow at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Adding {
        step: AddStep,
        draft: ProjectDraft,
    },
    Editing {
        step: EditStep,
        draft: ProjectDraft,
    },
    Deleting {
        step: DeleteStep,
    },
}

/// What one flow step decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// True when the flow finished (success, cancel, or abort).
    pub complete: bool,
    /// Prompt for the next input when the flow continues.
    pub prompt: Option<String>,
}

impl StepOutcome {
    pub fn complete() -> Self {
        Self {
            complete: true,
            prompt: None,
        }
    }

    pub fn again(prompt: impl Into<String>) -> Self {
        Self {
            complete: false,
            prompt: Some(prompt.into()),
        }
    }
}

fn is_cancel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("cancel")
}

fn placeholder_image(name: &str) -> String {
    format!(
        "/placeholder.svg?height=400&width=600&query={}",
        slugify(name)
    )
}

fn add_prompt(step: AddStep) -> &'static str {
    match step {
        AddStep::Name => "project name (must not be empty):",
        AddStep::Description => "project description (must not be empty):",
        AddStep::Technologies => "technologies (comma-separated list):",
        AddStep::SourceUrl => "source code URL:",
        AddStep::DemoUrl => "live demo URL:",
        AddStep::Image => "image URL (or type 'default' for placeholder):",
    }
}

fn edit_prompt(step: &EditStep) -> String {
    match step {
        EditStep::SelectProject => "project ID to edit:".to_string(),
        EditStep::SelectField { .. } => format!("field to edit ({}):", valid_fields()),
        EditStep::EditField { field, .. } => format!("new value for {field}:"),
    }
}

fn delete_prompt(step: &DeleteStep) -> &'static str {
    match step {
        DeleteStep::SelectProject => "project ID to delete:",
        DeleteStep::Confirm { .. } => "confirm deletion (yes/no):",
    }
}

fn split_technologies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn draft_of(project: &Project) -> ProjectDraft {
    ProjectDraft {
        name: project.name.clone(),
        description: project.description.clone(),
        technologies: project.technologies.clone(),
        source_url: project.source_url.clone(),
        demo_url: project.demo_url.clone(),
        image: project.image.clone(),
    }
}

impl FlowState {
    /// Arms the add flow at its first step.
    pub fn adding() -> Self {
        Self::Adding {
            step: AddStep::Name,
            draft: ProjectDraft::default(),
        }
    }

    /// Arms the edit flow at project selection.
    pub fn editing() -> Self {
        Self::Editing {
            step: EditStep::SelectProject,
            draft: ProjectDraft::default(),
        }
    }

    /// Arms the delete flow at project selection.
    pub fn deleting() -> Self {
        Self::Deleting {
            step: DeleteStep::SelectProject,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The prompt for the step the flow is waiting on.
    pub fn prompt(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Adding { step, .. } => Some(add_prompt(*step).to_string()),
            Self::Editing { step, .. } => Some(edit_prompt(step)),
            Self::Deleting { step } => Some(delete_prompt(step).to_string()),
        }
    }

    /// Feeds one input line to the armed flow.
    ///
    /// Output goes through `emit`; the returned outcome says whether the
    /// flow finished and what to prompt next. A call on an idle flow is a
    /// no-op that reports completion.
    pub fn step(
        &mut self,
        input: &str,
        store: &mut ProjectStore,
        emit: &mut dyn FnMut(Output),
    ) -> StepOutcome {
        match std::mem::take(self) {
            Self::Idle => StepOutcome::complete(),
            Self::Adding { step, draft } => self.step_add(input, step, draft, store, emit),
            Self::Editing { step, draft } => self.step_edit(input, step, draft, store, emit),
            Self::Deleting { step } => self.step_delete(input, step, store, emit),
        }
    }

    fn step_add(
        &mut self,
        input: &str,
        step: AddStep,
        mut draft: ProjectDraft,
        store: &mut ProjectStore,
        emit: &mut dyn FnMut(Output),
    ) -> StepOutcome {
        if is_cancel(input) {
            emit(Output::text("Project creation cancelled."));
            return StepOutcome::complete();
        }

        let value = input.trim();
        if value.is_empty() {
            let message = match step {
                AddStep::Name => "Project name cannot be empty. Please try again.",
                AddStep::Description => "Project description cannot be empty. Please try again.",
                AddStep::Technologies => {
                    "Technologies cannot be empty. Please enter at least one technology."
                }
                AddStep::SourceUrl => "Source URL cannot be empty. Please enter a URL.",
                AddStep::DemoUrl => "Demo URL cannot be empty. Please enter a URL.",
                AddStep::Image => "Image URL cannot be empty. Please enter a URL or type 'default'.",
            };
            emit(Output::error(TermError::empty_input(message)));
            *self = Self::Adding { step, draft };
            return StepOutcome::again(add_prompt(step));
        }

        let next = match step {
            AddStep::Name => {
                draft.name = value.to_string();
                AddStep::Description
            }
            AddStep::Description => {
                draft.description = value.to_string();
                AddStep::Technologies
            }
            AddStep::Technologies => {
                draft.technologies = split_technologies(value);
                AddStep::SourceUrl
            }
            AddStep::SourceUrl => {
                draft.source_url = value.to_string();
                AddStep::DemoUrl
            }
            AddStep::DemoUrl => {
                draft.demo_url = value.to_string();
                AddStep::Image
            }
            AddStep::Image => {
                draft.image = if value.eq_ignore_ascii_case("default") {
                    placeholder_image(&draft.name)
                } else {
                    value.to_string()
                };

                let project = store.add(draft);
                emit(Output::success(vec![
                    Block::Heading("Project Added Successfully".to_string()),
                    Block::Fields(vec![
                        ("Name".to_string(), project.name.clone()),
                        ("ID".to_string(), project.id.clone()),
                    ]),
                    Block::Text("Project has been added to the database.".to_string()),
                    Block::Text(format!("You can view it with: cd projects/{}", project.id)),
                ]));
                return StepOutcome::complete();
            }
        };

        *self = Self::Adding { step: next, draft };
        StepOutcome::again(add_prompt(next))
    }

    fn step_edit(
        &mut self,
        input: &str,
        step: EditStep,
        mut draft: ProjectDraft,
        store: &mut ProjectStore,
        emit: &mut dyn FnMut(Output),
    ) -> StepOutcome {
        if is_cancel(input) {
            emit(Output::text("Project editing cancelled."));
            return StepOutcome::complete();
        }

        let value = input.trim();
        match step {
            EditStep::SelectProject => {
                if value.is_empty() {
                    emit(Output::error(TermError::empty_input(
                        "Project ID cannot be empty. Please try again.",
                    )));
                    *self = Self::Editing { step, draft };
                    return StepOutcome::again(edit_prompt(&EditStep::SelectProject));
                }

                let Some(project) = store.get(value).cloned() else {
                    emit(Output::error(TermError::project_not_found(
                        value,
                        &store.ids(),
                    )));
                    *self = Self::Editing { step, draft };
                    return StepOutcome::again(edit_prompt(&EditStep::SelectProject));
                };

                emit(Output::info(vec![
                    Block::Heading(format!("Editing Project: {}", project.name)),
                    Block::Fields(vec![
                        ("ID".to_string(), project.id.clone()),
                        ("Name".to_string(), project.name.clone()),
                        ("Description".to_string(), project.description.clone()),
                        (
                            "Technologies".to_string(),
                            project.technologies.join(", "),
                        ),
                        ("Source URL".to_string(), project.source_url.clone()),
                        ("Demo URL".to_string(), project.demo_url.clone()),
                    ]),
                ]));

                draft = draft_of(&project);
                let next = EditStep::SelectField { id: project.id };
                let prompt = edit_prompt(&next);
                *self = Self::Editing { step: next, draft };
                StepOutcome::again(prompt)
            }
            EditStep::SelectField { id } => {
                let Ok(field) = value.to_lowercase().parse::<ProjectField>() else {
                    emit(Output::error(TermError::invalid_field(
                        value.to_lowercase(),
                        valid_fields(),
                    )));
                    let step = EditStep::SelectField { id };
                    let prompt = edit_prompt(&step);
                    *self = Self::Editing { step, draft };
                    return StepOutcome::again(prompt);
                };

                let next = EditStep::EditField { id, field };
                let prompt = edit_prompt(&next);
                *self = Self::Editing { step: next, draft };
                StepOutcome::again(prompt)
            }
            EditStep::EditField { id, field } => {
                if value.is_empty() {
                    emit(Output::error(TermError::empty_input(
                        "Value cannot be empty. Please try again.",
                    )));
                    let step = EditStep::EditField { id, field };
                    let prompt = edit_prompt(&step);
                    *self = Self::Editing { step, draft };
                    return StepOutcome::again(prompt);
                }

                let mut patch = ProjectPatch::default();
                let shown_value = match field {
                    ProjectField::Name => {
                        patch.name = Some(value.to_string());
                        value.to_string()
                    }
                    ProjectField::Description => {
                        patch.description = Some(value.to_string());
                        value.to_string()
                    }
                    ProjectField::Technologies => {
                        let technologies = split_technologies(value);
                        let shown = technologies.join(", ");
                        patch.technologies = Some(technologies);
                        shown
                    }
                    ProjectField::SourceUrl => {
                        patch.source_url = Some(value.to_string());
                        value.to_string()
                    }
                    ProjectField::DemoUrl => {
                        patch.demo_url = Some(value.to_string());
                        value.to_string()
                    }
                    ProjectField::Image => {
                        let image = if value.eq_ignore_ascii_case("default") {
                            placeholder_image(&draft.name)
                        } else {
                            value.to_string()
                        };
                        patch.image = Some(image.clone());
                        image
                    }
                };

                match store.update(&id, patch) {
                    Some(updated) => {
                        emit(Output::success(vec![
                            Block::Heading("Project Updated Successfully".to_string()),
                            Block::Fields(vec![
                                ("Field".to_string(), field.to_string()),
                                ("New Value".to_string(), shown_value),
                            ]),
                            Block::Text(format!(
                                "Project \"{}\" has been updated.",
                                updated.name
                            )),
                            Block::Text(format!(
                                "You can view it with: cd projects/{}",
                                updated.id
                            )),
                        ]));
                    }
                    None => {
                        emit(Output::error(TermError::store_mutation(
                            "Error updating project: Failed to update project",
                        )));
                    }
                }
                StepOutcome::complete()
            }
        }
    }

    fn step_delete(
        &mut self,
        input: &str,
        step: DeleteStep,
        store: &mut ProjectStore,
        emit: &mut dyn FnMut(Output),
    ) -> StepOutcome {
        if is_cancel(input) {
            emit(Output::text("Project deletion cancelled."));
            return StepOutcome::complete();
        }

        let value = input.trim();
        match step {
            DeleteStep::SelectProject => {
                if value.is_empty() {
                    emit(Output::error(TermError::empty_input(
                        "Project ID cannot be empty. Please try again.",
                    )));
                    *self = Self::Deleting { step };
                    return StepOutcome::again(delete_prompt(&DeleteStep::SelectProject));
                }

                let Some(project) = store.get(value).cloned() else {
                    emit(Output::error(TermError::project_not_found(
                        value,
                        &store.ids(),
                    )));
                    *self = Self::Deleting { step };
                    return StepOutcome::again(delete_prompt(&DeleteStep::SelectProject));
                };

                emit(Output::warning(vec![
                    Block::Heading(format!("Delete Project: {}", project.name)),
                    Block::Fields(vec![
                        ("ID".to_string(), project.id.clone()),
                        ("Name".to_string(), project.name.clone()),
                        ("Description".to_string(), project.description.clone()),
                    ]),
                    Block::Text(
                        "Are you sure you want to delete this project? This action cannot be undone."
                            .to_string(),
                    ),
                ]));

                let next = DeleteStep::Confirm { target: project };
                let prompt = delete_prompt(&next);
                *self = Self::Deleting { step: next };
                StepOutcome::again(prompt)
            }
            DeleteStep::Confirm { target } => {
                let confirmation = value.to_lowercase();
                if confirmation != "yes" && confirmation != "no" {
                    emit(Output::error(TermError::InvalidConfirmation));
                    let step = DeleteStep::Confirm { target };
                    let prompt = delete_prompt(&step);
                    *self = Self::Deleting { step };
                    return StepOutcome::again(prompt);
                }

                if confirmation == "no" {
                    emit(Output::text("Project deletion cancelled."));
                    return StepOutcome::complete();
                }

                if store.delete(&target.id) {
                    emit(Output::success(vec![
                        Block::Heading("Project Deleted Successfully".to_string()),
                        Block::Text(format!("Project \"{}\" has been deleted.", target.name)),
                    ]));
                } else {
                    emit(Output::error(TermError::store_mutation(
                        "Error deleting project: Failed to delete project",
                    )));
                }
                StepOutcome::complete()
            }
        }
    }
}
