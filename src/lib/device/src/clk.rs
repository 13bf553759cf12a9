use crate::ErrorType;

/// Operations of a clock provider
///
/// Clocks are named by the integer id used in the device tree bindings of
/// the provider. A provider that cannot derive a rate for an id reports 0.
pub trait ClkOps: ErrorType {
    /// Ungate the clock
    fn enable(&mut self, id: u32) -> Result<(), Self::Error>;
    /// Gate the clock
    fn disable(&mut self, id: u32) -> Result<(), Self::Error>;
    /// Current rate of the clock in Hz, 0 if unsupported
    fn get_rate(&self, id: u32) -> u64;
}
