//! Validating a signup request with fieldcheck.
//!
//! Run: `RUST_LOG=fieldcheck=trace cargo run -p fieldcheck --example signup_form`

use fieldcheck::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let requests = [
        json!({
            "username": "alice42",
            "email": "alice@example.com",
            "age": 34,
            "plan": "pro",
            "tags": ["rust", "wasm"],
            "starts": "2025-03-03"
        }),
        json!({
            "username": "al",
            "email": "alice@",
            "age": "thirty",
            "plan": "enterprise",
            "tags": [],
            "starts": "someday"
        }),
        json!({ "username": "bob" }),
    ];

    for (i, body) in requests.iter().enumerate() {
        println!("=== Request {} ===", i + 1);
        match validate(body, SessionOptions::default()) {
            Ok(()) => println!("valid\n"),
            Err(errors) => report(&errors),
        }
    }

    println!("=== Request 3, absent values rejected ===");
    let strict = SessionOptions::default().with_absent(AbsentPolicy::Reject);
    if let Err(errors) = validate(&requests[2], strict) {
        report(&errors);
    }
}

fn validate(body: &serde_json::Value, options: SessionOptions) -> Result<(), ValidationErrors> {
    // 2025-01-01T00:00:00Z
    let launch = chrono::DateTime::<chrono::Utc>::from_timestamp(1_735_689_600, 0).unwrap_or_default();
    let mut session = Session::with_options(options);

    session
        .chain("username", &body["username"])
        .required()
        .length(3, 20)
        .is_alphanumeric();
    session.chain("email", &body["email"]).required().is_email();
    session.chain("age", &body["age"]).numeric().range(18, 130);
    session
        .chain("plan", &body["plan"])
        .one_of(["free", "pro", "team"]);
    session.chain("tags", &body["tags"]).min_count(1).max_count(8);
    session
        .chain("starts", &body["starts"])
        .min_date(launch)
        .custom(|field: &str| -> Result<(), FieldError> {
            // Starting on a weekend is not supported.
            let weekend = body["starts"]
                .as_str()
                .and_then(fieldcheck::coerce::parse_timestamp)
                .is_some_and(|t| chrono::Datelike::weekday(&t).number_from_monday() > 5);
            if weekend {
                Err(FieldError::new(
                    field,
                    format!("{field} falls on a weekend"),
                    "weekday",
                    &body["starts"],
                ))
            } else {
                Ok(())
            }
        });

    session.finish()
}

fn report(errors: &ValidationErrors) {
    println!("{errors}");
    for error in errors {
        println!("  {:<10} [{}] {}", error.field(), error.tag(), error.message());
    }
    println!(
        "{}\n",
        serde_json::to_string_pretty(&errors.to_json()).unwrap_or_default()
    );
}
