//! Pointcut predicates selecting which units of work advice applies to.
//!
//! A unit of work is identified by its qualifying name: the module path of
//! the component plus the operation name. Predicates match over that name
//! and compose with boolean `&`, `|`, and `!`.

/// Qualifying name of a unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitName {
    module: &'static str,
    name: &'static str,
}

impl UnitName {
    /// Name a unit by its module path and operation name.
    #[must_use]
    pub const fn new(module: &'static str, name: &'static str) -> Self {
        Self { module, name }
    }

    /// Module path of the unit, e.g. `inbound::http::employees`.
    #[must_use]
    pub const fn module(&self) -> &'static str {
        self.module
    }

    /// Operation name of the unit, e.g. `create_employee`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Display for UnitName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.module, self.name)
    }
}

/// Predicate over a unit's qualifying name.
#[derive(Debug, Clone)]
pub enum Pointcut {
    /// Matches every unit.
    Any,
    /// Matches exactly one unit.
    Unit(UnitName),
    /// Matches every unit whose module path equals the prefix or sits
    /// below it (`domain` matches `domain::employee_service`).
    InModule(&'static str),
    /// Matches units whose operation name starts with the prefix, e.g.
    /// `get` or `set` for accessors.
    NamePrefix(&'static str),
    /// Both operands must match.
    And(Box<Pointcut>, Box<Pointcut>),
    /// Either operand may match.
    Or(Box<Pointcut>, Box<Pointcut>),
    /// Inverts the operand.
    Not(Box<Pointcut>),
}

impl Pointcut {
    /// Evaluate the predicate against a unit name.
    #[must_use]
    pub fn matches(&self, unit: &UnitName) -> bool {
        match self {
            Self::Any => true,
            Self::Unit(expected) => unit == expected,
            Self::InModule(prefix) => unit
                .module()
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with("::")),
            Self::NamePrefix(prefix) => unit.name().starts_with(prefix),
            Self::And(lhs, rhs) => lhs.matches(unit) && rhs.matches(unit),
            Self::Or(lhs, rhs) => lhs.matches(unit) || rhs.matches(unit),
            Self::Not(inner) => !inner.matches(unit),
        }
    }
}

impl std::ops::BitAnd for Pointcut {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::And(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::BitOr for Pointcut {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::Or(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Not for Pointcut {
    type Output = Self;

    fn not(self) -> Self {
        Self::Not(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for pointcut matching and composition.

    use rstest::rstest;

    use super::*;

    const CREATE_HANDLER: UnitName = UnitName::new("inbound::http::employees", "create_employee");
    const CREATE_SERVICE: UnitName = UnitName::new("domain::employee_service", "create_employee");
    const GETTER: UnitName = UnitName::new("domain::employee", "get_salary");
    const SETTER: UnitName = UnitName::new("domain::employee", "set_salary");

    #[test]
    fn exact_unit_matches_only_itself() {
        let pointcut = Pointcut::Unit(CREATE_HANDLER);
        assert!(pointcut.matches(&CREATE_HANDLER));
        assert!(!pointcut.matches(&CREATE_SERVICE));
    }

    #[rstest]
    #[case("inbound::http", CREATE_HANDLER, true)]
    #[case("inbound::http::employees", CREATE_HANDLER, true)]
    #[case("inbound", CREATE_HANDLER, true)]
    #[case("inbound::ht", CREATE_HANDLER, false)]
    #[case("domain", CREATE_HANDLER, false)]
    #[case("domain", CREATE_SERVICE, true)]
    fn module_prefix_matches_whole_segments(
        #[case] prefix: &'static str,
        #[case] unit: UnitName,
        #[case] expected: bool,
    ) {
        assert_eq!(Pointcut::InModule(prefix).matches(&unit), expected);
    }

    #[test]
    fn name_prefix_selects_accessors() {
        let getters = Pointcut::NamePrefix("get");
        assert!(getters.matches(&GETTER));
        assert!(!getters.matches(&SETTER));
        assert!(!getters.matches(&CREATE_SERVICE));
    }

    #[test]
    fn composition_excludes_accessors_from_broad_match() {
        let accessors = Pointcut::InModule("domain::employee")
            & (Pointcut::NamePrefix("get") | Pointcut::NamePrefix("set"));
        let rule = Pointcut::Any & !accessors;

        assert!(rule.matches(&CREATE_HANDLER));
        assert!(rule.matches(&CREATE_SERVICE));
        assert!(!rule.matches(&GETTER));
        assert!(!rule.matches(&SETTER));
    }

    #[test]
    fn accessor_exclusion_is_scoped_to_the_entity_module() {
        // A handler whose name happens to start with "get" is still matched
        // when the accessor pointcut is scoped to the entity module.
        let get_handler = UnitName::new("inbound::http::employees", "get_employee_by_id");
        let accessors = Pointcut::InModule("domain::employee")
            & (Pointcut::NamePrefix("get") | Pointcut::NamePrefix("set"));
        let rule = Pointcut::Any & !accessors;

        assert!(rule.matches(&get_handler));
    }
}
