use crate::domain::controller::DELETE_CONFIRM_MESSAGE;
use crate::domain::form::Step;
use crate::domain::FormController;
use crate::templates::components::{notice, Notice};
use crate::templates::desktop_layout;
use crate::templates::steps::render_step;
use maud::{html, Markup};

pub struct WizardVm<'a> {
    pub controller: &'a FormController,
    /// Serialized controller, round-tripped through the hidden `state` input.
    pub state_json: &'a str,
    pub action_url: &'a str,
    pub notice: Option<&'a Notice>,
    pub confirm_delete: bool,
}

pub fn wizard_page(vm: &WizardVm<'_>) -> Markup {
    let ctrl = vm.controller;
    let heading = if ctrl.appraisal_id.is_some() {
        "Edit appraisal"
    } else {
        "New appraisal"
    };

    desktop_layout(
        heading,
        html! {
            main class="container" {
                h1 { (heading) }
                p class="step-title" { (ctrl.step.to_string()) }

                @if let Some(n) = vm.notice {
                    (notice(n))
                }

                form method="post" action=(vm.action_url) {
                    // Enter in a text box re-renders instead of jumping steps.
                    button type="submit" name="action" value="stay" style="display:none" {}
                    input type="hidden" name="state" value=(vm.state_json);

                    nav class="pills" {
                        @for step in Step::all() {
                            button type="submit" name="action" value=(format!("goto:{}", step.number()))
                                aria-current=[(step == ctrl.step).then_some("step")] {
                                (step.number()) ". " (step.pill())
                            }
                        }
                    }

                    @if vm.confirm_delete {
                        div class="card notice notice-warning" {
                            p { (DELETE_CONFIRM_MESSAGE) }
                            button type="submit" name="action" value="confirm-delete" { "Yes, delete" }
                            " "
                            button type="submit" name="action" value="stay" { "Cancel" }
                        }
                    }

                    div class="card" {
                        (render_step(ctrl.step, &ctrl.form))
                    }

                    div class="actions" {
                        button type="submit" name="action" value="back" disabled[ctrl.step == Step::FIRST] { "← Back" }
                        @if ctrl.step != Step::LAST {
                            button type="submit" name="action" value="next" { "Next →" }
                        }
                        button type="submit" name="action" value="save-draft" { "Save draft" }
                        button type="submit" name="action" value="save-complete" { "Save & mark completed" }
                        @if let Some(id) = ctrl.appraisal_id {
                            button type="submit" name="action" value="delete" { "Delete" }
                            a href=(format!("/appraisals/{id}/summary")) { "View summary" }
                        }
                    }
                }
            }
        },
    )
}
