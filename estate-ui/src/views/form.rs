//! Create and edit form
//!
//! Fields address the JSON body by dotted path (`address.city`). Money is
//! typed in major units and sent in minor units, the way records carry it.

use estate_admin::domain::Money;
use estate_admin::page::Screen;
use leptos::*;
use leptos_router::*;
use serde_json::{Map, Value};

use crate::api::{save_record, SaveMethod};
use crate::state::GlobalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Money,
}

impl FieldKind {
    fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Number | FieldKind::Money => "number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub path: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub const fn required(path: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            path,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(path: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            path,
            label,
            kind,
            required: false,
        }
    }

    /// Input text for this field from an existing record body
    pub fn read(&self, record: &Value) -> String {
        let pointer = format!("/{}", self.path.replace('.', "/"));
        match (self.kind, record.pointer(&pointer)) {
            (FieldKind::Money, Some(Value::Number(n))) => n
                .as_i64()
                .map(|minor| format!("{:.2}", Money::from_minor(minor).major()))
                .unwrap_or_default(),
            (_, Some(Value::String(s))) => s.clone(),
            (_, Some(Value::Number(n))) => n.to_string(),
            _ => String::new(),
        }
    }

    /// JSON value for an input, `None` when blank
    pub fn parse(&self, input: &str) -> Result<Option<Value>, String> {
        let input = input.trim();
        if input.is_empty() {
            return if self.required {
                Err(format!("{} is required", self.label))
            } else {
                Ok(None)
            };
        }

        let invalid = || format!("{} must be a number", self.label);
        let value = match self.kind {
            FieldKind::Text | FieldKind::Email => Value::String(input.to_string()),
            FieldKind::Number => {
                let n: f64 = input.parse().map_err(|_| invalid())?;
                serde_json::Number::from_f64(n).map(Value::Number).ok_or_else(invalid)?
            }
            FieldKind::Money => {
                let n: f64 = input.parse().map_err(|_| invalid())?;
                Value::from(Money::from_major(n).minor())
            }
        };
        Ok(Some(value))
    }
}

/// Assemble a request body from `(field, input)` pairs
pub fn build_body<'a>(
    inputs: impl IntoIterator<Item = (&'a FormField, String)>,
) -> Result<Value, String> {
    let mut body = Map::new();
    for (field, input) in inputs {
        if let Some(value) = field.parse(&input)? {
            insert_at(&mut body, field.path, value);
        }
    }
    Ok(Value::Object(body))
}

/// Toast text for a successful save, naming the record when it has a name
fn saved_notice(method: SaveMethod, done: Screen, body: &Value) -> String {
    let section = done.section().map(|s| s.label()).unwrap_or("Record");
    let verb = match method {
        SaveMethod::Create => "created",
        SaveMethod::Update => "updated",
    };
    match body.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => format!("{} \"{}\" {}", section, name, verb),
        _ => format!("{} {}", section, verb),
    }
}

fn insert_at(object: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            object.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let child = object
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(child) = child {
                insert_at(child, rest, value);
            }
        }
    }
}

/// Form posting to `url` and returning to `done` on success
#[component]
pub fn RecordForm(
    fields: &'static [FormField],
    method: SaveMethod,
    #[prop(into)]
    url: Signal<String>,
    /// Existing record to prefill from
    #[prop(into)]
    record: Signal<Option<Value>>,
    done: Screen,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let navigate = use_navigate();

    let inputs: Vec<RwSignal<String>> = fields.iter().map(|_| create_rw_signal(String::new())).collect();
    let inputs = store_value(inputs);

    create_effect(move |_| {
        let record = record.get();
        inputs.with_value(|inputs| {
            for (field, input) in fields.iter().zip(inputs) {
                input.set(record.as_ref().map(|r| field.read(r)).unwrap_or_default());
            }
        });
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let body = inputs.with_value(|inputs| {
            build_body(fields.iter().zip(inputs.iter().map(|i| i.get_untracked())))
        });
        let body = match body {
            Ok(body) => body,
            Err(e) => {
                state.show_error(&e);
                return;
            }
        };

        let url = url.get_untracked();
        let navigate = navigate.clone();
        state.saving.set(true);
        spawn_local(async move {
            match save_record(method, &url, &body).await {
                Ok(()) => {
                    state.show_success(&saved_notice(method, done, &body));
                    navigate(done.path(), Default::default());
                }
                Err(e) => state.show_error(&e),
            }
            state.saving.set(false);
        });
    };

    let input_class = "w-full bg-gray-700 rounded-lg px-4 py-3 text-white border border-gray-600 \
                       focus:border-primary-500 focus:outline-none";

    view! {
        <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4 max-w-2xl">
            {inputs.with_value(|inputs| {
                fields
                    .iter()
                    .zip(inputs.iter().copied())
                    .map(|(field, input)| view! {
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">
                                {field.label}
                                {field.required.then(|| " *")}
                            </label>
                            <input
                                type=field.kind.input_type()
                                step=(field.kind == FieldKind::Money).then_some("0.01")
                                required=field.required
                                class=input_class
                                prop:value=move || input.get()
                                on:input=move |ev| input.set(event_target_value(&ev))
                            />
                        </div>
                    })
                    .collect_view()
            })}

            <button
                type="submit"
                disabled=move || state.saving.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
            >
                {move || if state.saving.get() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_saved_notice_names_record() {
        let body = json!({"name": "Harbor View Loft"});
        assert_eq!(
            saved_notice(SaveMethod::Update, Screen::PropertyList, &body),
            "Property \"Harbor View Loft\" updated"
        );
        assert_eq!(
            saved_notice(SaveMethod::Create, Screen::ClientList, &json!({})),
            "Client created"
        );
    }

    const FIELDS: [FormField; 4] = [
        FormField::required("name", "Name", FieldKind::Text),
        FormField::optional("address.city", "City", FieldKind::Text),
        FormField::required("price", "Price", FieldKind::Money),
        FormField::optional("area", "Area", FieldKind::Number),
    ];

    #[test]
    fn test_build_nested_body() {
        let inputs = vec![
            "Harbor View Loft".to_string(),
            "Portland".to_string(),
            "685000".to_string(),
            String::new(),
        ];
        let body = build_body(FIELDS.iter().zip(inputs)).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Harbor View Loft",
                "address": { "city": "Portland" },
                "price": 68_500_000
            })
        );
    }

    #[test]
    fn test_required_and_numeric_checks() {
        let missing = vec![String::new(), String::new(), "1".to_string(), String::new()];
        assert_eq!(
            build_body(FIELDS.iter().zip(missing)),
            Err("Name is required".to_string())
        );

        let bad = vec!["A".to_string(), String::new(), "lots".to_string(), String::new()];
        assert_eq!(
            build_body(FIELDS.iter().zip(bad)),
            Err("Price must be a number".to_string())
        );
    }

    #[test]
    fn test_read_prefills_from_record() {
        let record = json!({
            "name": "Harbor View Loft",
            "address": { "city": "Portland" },
            "price": 68_500_000,
            "area": 112.5
        });
        let read: Vec<String> = FIELDS.iter().map(|f| f.read(&record)).collect();
        assert_eq!(read, vec!["Harbor View Loft", "Portland", "685000.00", "112.5"]);
    }
}
