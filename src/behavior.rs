//! Interchangeable duck behaviors.
//!
//! Each concern gets a single-method trait. Concrete behaviors are unit structs
//! that render one line; any `Fn() -> String` closure also qualifies, so new
//! behaviors can be added without touching [`Duck`](crate::duck::Duck).

pub trait FlyBehavior {
    fn fly(&self) -> String;
}

pub trait QuackBehavior {
    fn quack(&self) -> String;
}

// ============================================================================
// Flying
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlyWithWings;

impl FlyBehavior for FlyWithWings {
    fn fly(&self) -> String {
        "I'm flying!!!".to_string()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlyNoWay;

impl FlyBehavior for FlyNoWay {
    fn fly(&self) -> String {
        "I can't fly.".to_string()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlyRocketPowered;

impl FlyBehavior for FlyRocketPowered {
    fn fly(&self) -> String {
        "I'm flying with a rocket!".to_string()
    }
}

// ============================================================================
// Quacking
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Quack;

impl QuackBehavior for Quack {
    fn quack(&self) -> String {
        "Quack!!!".to_string()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MuteQuack;

impl QuackBehavior for MuteQuack {
    fn quack(&self) -> String {
        "<< Silence >>".to_string()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Squeak;

impl QuackBehavior for Squeak {
    fn quack(&self) -> String {
        "Squeak!!!".to_string()
    }
}

// ============================================================================
// Closures as behaviors
// ============================================================================

impl<F> FlyBehavior for F
where
    F: Fn() -> String,
{
    fn fly(&self) -> String {
        self()
    }
}

/// Wraps a closure as a quack behavior.
///
/// A second blanket impl over `Fn() -> String` would overlap with the fly one
/// for every closure, so quacking closures go through this newtype.
pub struct QuackFn<F>(pub F);

impl<F> QuackBehavior for QuackFn<F>
where
    F: Fn() -> String,
{
    fn quack(&self) -> String {
        (self.0)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fly_lines() {
        assert_eq!(FlyWithWings.fly(), "I'm flying!!!");
        assert_eq!(FlyNoWay.fly(), "I can't fly.");
        assert_eq!(FlyRocketPowered.fly(), "I'm flying with a rocket!");
    }

    #[test]
    fn test_quack_lines() {
        assert_eq!(Quack.quack(), "Quack!!!");
        assert_eq!(MuteQuack.quack(), "<< Silence >>");
        assert_eq!(Squeak.quack(), "Squeak!!!");
    }

    #[test]
    fn test_behaviors_are_interchangeable_trait_objects() {
        let fliers: Vec<Box<dyn FlyBehavior>> = vec![
            Box::new(FlyWithWings),
            Box::new(FlyNoWay),
            Box::new(FlyRocketPowered),
            Box::new(|| "I'm gliding.".to_string()),
        ];
        let lines: Vec<String> = fliers.iter().map(|b| b.fly()).collect();
        assert_eq!(
            lines,
            vec![
                "I'm flying!!!",
                "I can't fly.",
                "I'm flying with a rocket!",
                "I'm gliding.",
            ]
        );
    }

    #[test]
    fn test_quack_closure() {
        let honk = QuackFn(|| "Honk!".to_string());
        assert_eq!(honk.quack(), "Honk!");
    }

    #[test]
    fn test_behaviors_are_stateless() {
        let squeak = Squeak;
        assert_eq!(squeak.quack(), squeak.quack());
    }
}
