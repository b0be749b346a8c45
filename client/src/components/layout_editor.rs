//! Grid editor for a room's seat labels.
//!
//! DESIGN
//! ======
//! The table is rebuilt only when the grid shape changes. Typing into a cell
//! updates the draft without re-creating the inputs, so focus stays put.
//! Blank cells are aisles; the draft converts them when it is stored.

use leptos::prelude::*;
use seatgrid::LayoutDraft;

fn apply(draft: Signal<LayoutDraft>, on_change: Callback<LayoutDraft>, edit: impl FnOnce(&mut LayoutDraft)) {
    let mut next = draft.get_untracked();
    edit(&mut next);
    on_change.run(next);
}

#[component]
pub fn LayoutEditor(draft: Signal<LayoutDraft>, on_change: Callback<LayoutDraft>) -> impl IntoView {
    let shape = Memo::new(move |_| draft.with(LayoutDraft::shape));

    let rows = move || {
        shape
            .get()
            .into_iter()
            .enumerate()
            .map(|(row, width)| {
                let cells = (0..width)
                    .map(|col| {
                        view! {
                            <td>
                                <input
                                    class="layout-input"
                                    type="text"
                                    placeholder="통로"
                                    prop:value=move || draft.with(|d| d.cell(row, col).to_owned())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        apply(draft, on_change, |d| d.set_cell(row, col, &value));
                                    }
                                />
                            </td>
                        }
                    })
                    .collect_view();
                view! { <tr>{cells}</tr> }
            })
            .collect_view()
    };

    view! {
        <div class="layout-editor">
            <div class="layout-editor__size">
                <label>
                    "행"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || draft.with(|d| d.rows.to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            apply(draft, on_change, |d| d.set_requested_rows(&value));
                        }
                    />
                    <button type="button" class="btn btn--small" on:click=move |_| apply(draft, on_change, LayoutDraft::remove_row)>
                        "-"
                    </button>
                    <button type="button" class="btn btn--small" on:click=move |_| apply(draft, on_change, LayoutDraft::add_row)>
                        "+"
                    </button>
                </label>
                <label>
                    "열"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || draft.with(|d| d.cols.to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            apply(draft, on_change, |d| d.set_requested_cols(&value));
                        }
                    />
                    <button type="button" class="btn btn--small" on:click=move |_| apply(draft, on_change, LayoutDraft::remove_column)>
                        "-"
                    </button>
                    <button type="button" class="btn btn--small" on:click=move |_| apply(draft, on_change, LayoutDraft::add_column)>
                        "+"
                    </button>
                </label>
                <button type="button" class="btn" on:click=move |_| apply(draft, on_change, LayoutDraft::resize)>
                    "크기 조정"
                </button>
            </div>
            <table class="layout-editor__table">
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
