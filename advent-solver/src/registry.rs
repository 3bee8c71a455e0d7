//! Solver registry for looking up solution modules by day number

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use std::collections::BTreeMap;

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solution module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The day number the module is registered for
    pub day: u32,
    /// Number of entry points the module exposes
    pub parts: u8,
}

/// Factory entry with metadata
struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// The registry is immutable once built. Registering the same day twice is
/// rejected at build time.
///
/// # Example
///
/// ```ignore
/// # use advent_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register(1, 2, |input| { /* ... */ Ok(Box::new(/* solver */)) })
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<u32, SolverFactoryEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a solver factory for a day
    ///
    /// # Arguments
    /// * `day` - The day number (the digits of the solution directory name)
    /// * `parts` - Number of entry points the module exposes
    /// * `factory` - A function that takes input and returns a boxed DynSolver
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - A solver is already registered for this day
    pub fn register<F>(mut self, day: u32, parts: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if self.solvers.contains_key(&day) {
            return Err(RegistrationError::DuplicateSolver(day));
        }
        self.solvers.insert(
            day,
            SolverFactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    ///
    /// ```no_run
    /// # use advent_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry mapping day numbers to solution module factories
pub struct SolverRegistry {
    solvers: BTreeMap<u32, SolverFactoryEntry>,
}

impl SolverRegistry {
    /// Get metadata for the module registered for `day`
    pub fn get_info(&self, day: u32) -> Option<FactoryInfo> {
        self.solvers.get(&day).map(|e| FactoryInfo {
            day,
            parts: e.parts,
        })
    }

    /// Check if a module is registered for `day`
    pub fn contains(&self, day: u32) -> bool {
        self.solvers.contains_key(&day)
    }

    /// Iterate over metadata for all registered modules, ordered by day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.solvers.iter().map(|(&day, e)| FactoryInfo {
            day,
            parts: e.parts,
        })
    }

    /// Get the number of registered modules
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }

    /// Create a solver instance for `day` by parsing `input`
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        day: u32,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self.solvers.get(&day).ok_or(SolverError::NotFound(day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Has no associated types, so different solver types can be collected in
/// a single container. Every `Solver` gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u32,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u32,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(day, S::PARTS, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(day, input)?))
        })
    }
}

/// Plugin information for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`, but can be
/// submitted by hand:
///
/// ```no_run
/// use advent_solver::{ParseError, PuzzleParser, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl PuzzleParser for Day1Solver {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 2;
///
///     fn solve_part(input: &mut &str, part: u8) -> Result<String, SolveError> {
///         Ok(format!("{}:{}", part, input.len()))
///     }
/// }
///
/// advent_solver::inventory::submit! {
///     SolverPlugin {
///         day: 1,
///         solver: &Day1Solver,
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The day number the module answers for
    pub day: u32,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
}

inventory::collect!(SolverPlugin);

/// Macro to register a solver type with a mutable registry builder binding
///
/// # Example
///
/// ```
/// use advent_solver::{register_solver, ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver};
///
/// struct MyDay1Solver;
///
/// impl PuzzleParser for MyDay1Solver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for MyDay1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut (), part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, MyDay1Solver, 1);
/// let registry = builder.build();
/// assert!(registry.contains(1));
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $day:expr) => {
        $builder = $builder
            .register(
                $day,
                <$solver as $crate::Solver>::PARTS,
                move |input: &str| {
                    Ok(Box::new($crate::SolverInstance::<$solver>::new($day, input)?))
                },
            )
            .expect("Failed to register solver");
    };
}
