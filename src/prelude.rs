pub use crate::hal::adc::OneShot as _;

pub use crate::adc::AdcExt as _;
pub use crate::nvic::InterruptControl as _;
pub use crate::swm::AnalogPins as _;
pub use crate::swm::SwmExt as _;
pub use crate::syscon::AdcClocking as _;
pub use crate::syscon::SysconExt as _;
pub use crate::time::U32Ext as _;
