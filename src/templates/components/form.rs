use crate::domain::FieldErrors;
use maud::{html, Markup};

fn field_error(errors: &FieldErrors, name: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.get(name) {
            p class="field-error" id=(format!("{name}-error")) { (msg) }
        }
    }
}

pub struct Field<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
}

pub fn text_input(field: Field<'_>, input_type: &str, errors: &FieldErrors) -> Markup {
    let invalid = errors.contains(field.name);
    html! {
        div class="field" {
            label for=(field.name) { (field.label) }
            input
                type=(input_type)
                id=(field.name)
                name=(field.name)
                value=(field.value)
                placeholder=(field.placeholder)
                aria-invalid=[invalid.then_some("true")];
            (field_error(errors, field.name))
        }
    }
}

pub fn textarea(field: Field<'_>, hint: Option<&str>, errors: &FieldErrors) -> Markup {
    let invalid = errors.contains(field.name);
    html! {
        div class="field" {
            label for=(field.name) { (field.label) }
            textarea
                id=(field.name)
                name=(field.name)
                rows="4"
                placeholder=(field.placeholder)
                aria-invalid=[invalid.then_some("true")]
            { (field.value) }
            @if let Some(hint) = hint {
                p class="hint" { (hint) }
            }
            (field_error(errors, field.name))
        }
    }
}

/// `<select>` whose options are `(value, label)` pairs.
pub fn select(
    field: Field<'_>,
    options: &[(&str, &str)],
    errors: &FieldErrors,
) -> Markup {
    html! {
        div class="field" {
            label for=(field.name) { (field.label) }
            select id=(field.name) name=(field.name) {
                option value="" disabled selected[field.value.is_empty()] { (field.placeholder) }
                @for (value, label) in options {
                    option value=(value) selected[*value == field.value] { (label) }
                }
            }
            (field_error(errors, field.name))
        }
    }
}

pub fn radio_group(
    field: Field<'_>,
    options: &[(&str, &str)],
    errors: &FieldErrors,
) -> Markup {
    html! {
        fieldset class="field radio-group" {
            legend { (field.label) }
            @for (value, label) in options {
                label class="radio" {
                    input type="radio" name=(field.name) value=(value) checked[*value == field.value];
                    " " (label)
                }
            }
            (field_error(errors, field.name))
        }
    }
}
