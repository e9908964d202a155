/// Error type for AD7746 operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error on the I2C bus (NACK or bus fault)
    Communication(E),
    /// The conversion-ready bit did not clear within the poll limit
    NotReady,
    /// An averaging session could not collect the requested number of
    /// valid samples
    InsufficientSamples,
}
