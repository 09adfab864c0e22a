use crate::layout::toast_service::use_toasts;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::date_utils::{date_input_value, today};
use crate::shared::icons::icon;
use contracts::domain::a001_decoration::Decoration;
use contracts::domain::a002_booking::{submit_booking, BookingError, BookingForm};
use leptos::prelude::*;

/// Two-way binding for one text field of the form
fn bind(
    form: RwSignal<BookingForm>,
    get: fn(&BookingForm) -> &String,
    set: fn(&mut BookingForm, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || form.with(|f| get(f).clone())),
        Callback::new(move |value| form.update(|f| set(f, value))),
    )
}

/// Booking request form for a single decoration.
///
/// Nothing is sent anywhere yet: an accepted request is logged, then the
/// form is cleared. A rejected one keeps what the user typed.
#[component]
pub fn BookingRequestForm(decoration: Decoration) -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(BookingForm::default());
    let decoration = StoredValue::new(decoration);

    let (name, set_name) = bind(form, |f| &f.name, |f, v| f.name = v);
    let (email, set_email) = bind(form, |f| &f.email, |f, v| f.email = v);
    let (phone, set_phone) = bind(form, |f| &f.phone, |f, v| f.phone = v);
    let (date, set_date) = bind(form, |f| &f.preferred_date, |f, v| f.preferred_date = v);
    let (address, set_address) = bind(form, |f| &f.address, |f, v| f.address = v);
    let (message, set_message) = bind(form, |f| &f.message, |f, v| f.message = v);

    let min_date = date_input_value(today());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut current = form.get_untracked();
        let result =
            decoration.with_value(|d| submit_booking(d, &mut current, today()));

        match result {
            Ok(request) => {
                match serde_json::to_string(&request) {
                    Ok(payload) => log::info!("Booking request submitted: {payload}"),
                    Err(e) => log::error!("Failed to serialize booking request: {e}"),
                }
                form.set(current);
                toasts.push(request.notification());
            }
            Err(err) => {
                if err == BookingError::FullyBooked {
                    log::warn!(
                        "Blocked booking for fully booked decoration {}",
                        decoration.with_value(|d| d.id.to_string())
                    );
                }
                toasts.push(err.notification());
            }
        }
    };

    view! {
        // novalidate: the submit rule reports problems through toasts
        <form class="booking-form" novalidate=true on:submit=on_submit>
            <div class="form__row">
                <Input id="name" label="Full Name" value=name on_input=set_name required=true />
                <Input
                    id="email"
                    label="Email"
                    input_type="email"
                    value=email
                    on_input=set_email
                    required=true
                />
            </div>
            <div class="form__row">
                <Input
                    id="phone"
                    label="Phone Number"
                    input_type="tel"
                    value=phone
                    on_input=set_phone
                    required=true
                />
                <Input
                    id="date"
                    label="Preferred Date"
                    input_type="date"
                    min=min_date
                    value=date
                    on_input=set_date
                    required=true
                />
            </div>
            <Textarea
                id="address"
                label="Event Address"
                value=address
                on_input=set_address
                placeholder="Enter the full address where the decoration will be set up"
            />
            <Textarea
                id="message"
                label="Additional Message (Optional)"
                value=message
                on_input=set_message
                placeholder="Any special requirements or questions?"
            />
            <Button button_type="submit" size="lg" class="button--block">
                {icon("calendar")}
                "Submit Booking Request"
            </Button>
        </form>
    }
}
