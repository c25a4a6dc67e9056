// src/noyau/operateur.rs

/// Opérateur binaire en attente d’un second opérande.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

/// Ce qu’on applique à l’accumulateur : un opérateur binaire, ou "=".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Binaire(Operateur),
    Egal,
}

impl Operateur {
    #[cfg(test)]
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Symbole affiché sur la ligne d’expression (et sur le pavé).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    /// Caractère ASCII tapé au clavier : + - * /
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }
}

/// a op b.
///
/// - division par zéro -> 0 (pas d’erreur)
/// - "=" -> b
/// - débordement (±∞) -> 0, le tampon reste lisible
pub fn calculate(a: f64, b: f64, op: Operation) -> f64 {
    let r = match op {
        Operation::Binaire(Operateur::Plus) => a + b,
        Operation::Binaire(Operateur::Moins) => a - b,
        Operation::Binaire(Operateur::Fois) => a * b,
        Operation::Binaire(Operateur::Divise) => {
            if b == 0.0 {
                0.0
            } else {
                a / b
            }
        }
        Operation::Egal => b,
    };

    if r.is_finite() {
        r
    } else {
        0.0
    }
}
