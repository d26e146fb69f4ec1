//! Field validation for form submissions.

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl Value {
    fn to_text(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => n.to_string(),
        }
    }
}

/// A value bundled with the constraints it must satisfy. Constraints left
/// unset always hold.
#[derive(Clone, Debug, PartialEq)]
pub struct Validatable {
    pub value: Value,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(Value::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::new(Value::Number(value))
    }

    #[must_use]
    pub fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    #[must_use]
    pub fn min_length(self, min_length: usize) -> Self {
        Self {
            min_length: Some(min_length),
            ..self
        }
    }

    #[must_use]
    #[allow(dead_code)]
    pub fn max_length(self, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    #[must_use]
    pub fn min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    #[must_use]
    pub fn max(self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }
}

/// Check that every constraint of `input` holds. Length bounds only apply
/// to text, numeric bounds only to numbers.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;
    if input.required {
        is_valid &= !input.value.to_text().trim().is_empty();
    }
    match &input.value {
        Value::Text(s) => {
            let len = s.chars().count();
            if let Some(min_length) = input.min_length {
                is_valid &= len >= min_length;
            }
            if let Some(max_length) = input.max_length {
                is_valid &= len <= max_length;
            }
        }
        Value::Number(n) => {
            if let Some(min) = input.min {
                is_valid &= *n >= min;
            }
            if let Some(max) = input.max {
                is_valid &= *n <= max;
            }
        }
    }
    is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_constraints() {
        assert!(validate(&Validatable::text("")));
        assert!(validate(&Validatable::number(-12.0)));
    }

    #[test]
    fn test_required() {
        assert!(!validate(&Validatable::text("").required()));
        assert!(!validate(&Validatable::text("   \t").required()));
        assert!(validate(&Validatable::text(" x ").required()));
        assert!(validate(&Validatable::number(0.0).required()));
    }

    #[test]
    fn test_length_bounds() {
        assert!(!validate(&Validatable::text("abcd").min_length(5)));
        assert!(validate(&Validatable::text("abcde").min_length(5)));
        assert!(validate(&Validatable::text("abc").max_length(3)));
        assert!(!validate(&Validatable::text("abcd").max_length(3)));
        assert!(validate(&Validatable::text("éèàùç").min_length(5).max_length(5)));
    }

    #[test]
    fn test_numeric_bounds() {
        let people = |n: f64| Validatable::number(n).required().min(1.0).max(5.0);
        assert!(!validate(&people(0.0)));
        for n in 1..=5 {
            assert!(validate(&people(f64::from(n))));
        }
        assert!(!validate(&people(6.0)));
        assert!(!validate(&people(f64::NAN)));
    }

    #[test]
    fn test_bounds_ignored_for_other_kind() {
        assert!(validate(&Validatable::text("abc").min(10.0).max(0.0)));
        assert!(validate(&Validatable::number(3.0).min_length(10).max_length(0)));
    }

    #[test]
    fn test_adding_constraint_is_monotonic() {
        let bases = [
            Validatable::text(""),
            Validatable::text("abcd"),
            Validatable::text("a longer description"),
            Validatable::number(0.0),
            Validatable::number(3.0),
            Validatable::number(9.0),
            Validatable::text("abcd").min_length(5),
            Validatable::text(" ").required(),
            Validatable::number(9.0).max(5.0),
        ];
        let tighten: [fn(Validatable) -> Validatable; 5] = [
            Validatable::required,
            |v| v.min_length(5),
            |v| v.max_length(10),
            |v| v.min(1.0),
            |v| v.max(5.0),
        ];
        for base in &bases {
            for add in &tighten {
                let tighter = add(base.clone());
                if !validate(base) {
                    assert!(!validate(&tighter), "{tighter:?} became valid");
                }
                if validate(&tighter) {
                    assert!(validate(base));
                }
            }
        }
    }
}
