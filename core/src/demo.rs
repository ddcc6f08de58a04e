//! Demonstration walkthrough of the value types.
//!
//! Replays the classic sequence: lazy vs eager area, static math helpers,
//! area assignment (accepted then rejected), and name sanitization.

use serde::Serialize;
use thiserror::Error;

use accessors_config::DemoConfig;
use accessors_types::{AreaUpdate, DerivedAreaShape, EagerSquare, SanitizedPerson, Square, math};

use crate::trace::TraceLog;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to render person: {0}")]
    Render(#[from] serde_json::Error),
}

/// Read-side view of a person, as returned by its accessors.
#[derive(Serialize)]
struct PersonView {
    first_name: String,
    last_name: String,
}

impl From<&SanitizedPerson> for PersonView {
    fn from(person: &SanitizedPerson) -> Self {
        Self {
            first_name: person.first_name(),
            last_name: person.last_name(),
        }
    }
}

/// Build the full demonstration trace for `config`.
pub fn run(config: &DemoConfig) -> Result<TraceLog, DemoError> {
    let mut log = TraceLog::default();

    square_section(&mut log, config);
    math_section(&mut log, config);
    lazy_section(&mut log, config);
    eager_section(&mut log, config);
    derived_section(&mut log, config);
    person_section(&mut log, config)?;

    tracing::debug!(lines = log.len(), "Demo trace complete");
    Ok(log)
}

fn square_section(log: &mut TraceLog, config: &DemoConfig) {
    let square = Square::new(config.side_length.as_f64());
    log.value("square.area", square.area());
    log.text(square.area_message());
}

fn math_section(log: &mut TraceLog, config: &DemoConfig) {
    let (a, b) = config.hypotenuse_legs;
    log.value("cube", math::cube(config.cube_input));
    log.value("hypotenuse", math::hypotenuse(a, b));
}

fn lazy_section(log: &mut TraceLog, config: &DemoConfig) {
    let square = Square::new(config.side_length.as_f64());
    log.value("lazy.side_length", square.side_length());
    log.value("lazy.area", square.area());
}

fn eager_section(log: &mut TraceLog, config: &DemoConfig) {
    let mut square = EagerSquare::new(config.eager_side_length);
    log.value("eager.side_length", square.side_length());
    log.value("eager.area", square.area());

    square.set_side_length(config.eager_resized_side_length);
    let after = format!("after side_length = {}", config.eager_resized_side_length);
    log.value(
        format!("eager.side_length ({after})"),
        square.side_length(),
    );
    let area = if square.is_stale() {
        format!("{} (stale)", square.area())
    } else {
        square.area().to_string()
    };
    log.value(format!("eager.area ({after})"), area);
}

fn derived_section(log: &mut TraceLog, config: &DemoConfig) {
    let mut shape = DerivedAreaShape::from_side_length(config.side_length);
    log.value("derived.side_length", shape.side_length());
    log.value("derived.area", shape.area());

    for requested in [config.target_area, config.rejected_area] {
        let update = shape.set_area(requested);
        let after = match update {
            AreaUpdate::Applied { .. } => format!("after area = {requested}"),
            AreaUpdate::Rejected { .. } => format!("after rejected area = {requested}"),
        };
        log.value(
            format!("derived.side_length ({after})"),
            shape.side_length(),
        );
        log.value(format!("derived.area ({after})"), shape.area());
    }
}

fn person_section(log: &mut TraceLog, config: &DemoConfig) -> Result<(), DemoError> {
    let mut person = SanitizedPerson::new(&config.first_name, &config.last_name);
    log.value(
        "person",
        serde_json::to_string(&PersonView::from(&person))?,
    );

    person.set_first_name(&config.renamed_first_name);
    log.value(
        format!(
            "person.first_name (after first_name = {})",
            config.renamed_first_name
        ),
        person.first_name(),
    );
    Ok(())
}
