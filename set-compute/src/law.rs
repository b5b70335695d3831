use std::fmt;

/// The marker recorded when no law could be applied to a signature.
pub const NOT_SIMPLIFIABLE: &str = "No simplificable";

/// The algebraic laws of sets that the simplifier can apply.
///
/// The variants are declared in the order the matcher tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// `^^{X} = X`
    DoubleComplement,

    /// `& {X} ^{X} = VACIO`
    EmptyComplement,

    /// `U {X} ^{X} = UNIVERSO`
    UniverseComplement,

    /// `U {X} {X} = X`
    /// `& {X} {X} = X`
    Idempotence,

    /// `- {X} {X} = VACIO`
    SelfDifference,

    /// `& U {X} {Y} {X} = X`
    /// `U & {X} {Y} {X} = X`
    Absorption,

    /// `^ & {X} {Y} = U ^{X} ^{Y}`
    /// `^ U {X} {Y} = & ^{X} ^{Y}`
    DeMorgan,

    /// `U {X} & {Y} {Z} = & U {X} {Y} U {X} {Z}`
    Distributive,

    /// `U {X} U {Y} {Z} = U U {X} {Y} {Z}`
    Associative,

    /// `U {X} {Y} = U {Y} {X}`
    Commutative,
}

impl Law {
    /// Every law, in matching priority order.
    pub const ALL: [Law; 10] = [
        Law::DoubleComplement,
        Law::EmptyComplement,
        Law::UniverseComplement,
        Law::Idempotence,
        Law::SelfDifference,
        Law::Absorption,
        Law::DeMorgan,
        Law::Distributive,
        Law::Associative,
        Law::Commutative,
    ];

    /// Returns the display name of the law, as recorded in simplification reports.
    pub fn title(self) -> &'static str {
        match self {
            Law::DoubleComplement => "Ley del Doble Complemento",
            Law::EmptyComplement | Law::UniverseComplement => "Ley del Complemento Total",
            Law::SelfDifference => "Ley de Diferencia Propia",
            Law::Idempotence => "Propiedades Idempotentes",
            Law::Absorption => "Propiedades de Absorción",
            Law::DeMorgan => "Leyes de De Morgan",
            Law::Distributive => "Propiedades Distributivas",
            Law::Associative => "Propiedades Asociativas",
            Law::Commutative => "Propiedades Conmutativas",
        }
    }

    /// Returns true if the law reduces a signature to a result directly, instead of rearranging
    /// it. A direct law can only fire once in a row.
    pub fn is_direct(self) -> bool {
        matches!(self, Law::SelfDifference | Law::UniverseComplement | Law::EmptyComplement)
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
