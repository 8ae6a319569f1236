//! Comparison form with a variable number of file inputs.
//!
//! Slots come from the [`FormController`] model; add/remove only touch the
//! model and the `<For>` list re-renders. Submitting serializes the live
//! form element so every file input ends up in the multipart body.

use leptos::*;

use crate::services::{collect_form, submit_files};
use crate::{FileSlot, FormController, ACCEPTED_EXTENSION, BACKEND_URL};

#[component]
pub fn PlagiarismForm(controller: RwSignal<FormController>) -> impl IntoView {
    let form_ref = create_node_ref::<html::Form>();

    let on_add = move |_| {
        controller.update(|c| {
            let slot = c.add_slot();
            log::debug!("➕ Added {}", slot.field_name());
        });
    };

    let on_remove = move |_| {
        controller.update(|c| {
            if !c.remove_slot() {
                log::debug!("At least two files are required, ignoring remove");
            }
        });
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(form) = form_ref.get() else {
            log::error!("Comparison form is not mounted");
            return;
        };
        let Some(ticket) = controller.try_update(FormController::begin_submit) else {
            return;
        };

        let form_data = match collect_form(&form) {
            Ok(data) => data,
            Err(e) => {
                log::error!("❌ {}", e);
                controller.update(|c| {
                    c.complete_submit(ticket, Err(e));
                });
                return;
            }
        };

        log::info!("📤 Submitting files (request #{})", ticket.id());

        spawn_local(async move {
            let result = submit_files(form_data, BACKEND_URL).await;
            match &result {
                Ok(response) => log::info!("✅ Received {} report entries", response.report.len()),
                Err(e) => log::error!("❌ Comparison failed: {}", e),
            }

            let applied = controller
                .try_update(|c| c.complete_submit(ticket, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("Discarded response of superseded request #{}", ticket.id());
            }
        });
    };

    view! {
        <form id="plagiarism-form" node_ref=form_ref on:submit=on_submit>
            <For
                each=move || controller.with(|c| c.slots().to_vec())
                key=|slot| slot.index()
                children=move |slot| view! { <FileInputSlot file_slot=slot/> }
            />

            <div class="form-actions mb-3">
                <button type="button" class="btn btn-outline-secondary btn-sm" on:click=on_add>
                    "Add file"
                </button>
                <button
                    type="button"
                    class="btn btn-outline-secondary btn-sm"
                    on:click=on_remove
                    disabled=move || controller.with(|c| c.slot_count() <= crate::MIN_SLOTS)
                >
                    "Remove file"
                </button>
            </div>

            <button type="submit" class="btn btn-primary">"Compare"</button>
        </form>
    }
}

/// Attributes of one rendered file input.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotInput {
    pub id: String,
    pub name: String,
    pub label: String,
    pub accept: &'static str,
    pub required: bool,
}

impl From<FileSlot> for SlotInput {
    fn from(slot: FileSlot) -> Self {
        Self {
            id: slot.field_name(),
            name: slot.field_name(),
            label: slot.label(),
            accept: ACCEPTED_EXTENSION,
            required: true,
        }
    }
}

#[component]
fn FileInputSlot(file_slot: FileSlot) -> impl IntoView {
    let input = SlotInput::from(file_slot);

    view! {
        <div class="file-input mb-3">
            <label for=input.id.clone() class="form-label small">{input.label}</label>
            <input
                type="file"
                class="form-control file-inputs"
                id=input.id
                name=input.name
                accept=input.accept
                required=input.required
            />
        </div>
    }
}
