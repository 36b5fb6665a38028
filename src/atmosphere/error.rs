use thiserror::Error;

/// Errors for out-of-domain atmospheric inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AtmosphereError {
    #[error("Relative humidity must be between 0 and 100%, got {0}")]
    HumidityOutOfRange(f64),

    #[error("Dew point is undefined at 0% relative humidity")]
    DewPointUndefined,

    #[error("Temperature must be finite and above -237.7 °C, got {0}")]
    InvalidTemperature(f64),

    #[error("Collection area must be a finite, non-negative number of m², got {0}")]
    InvalidArea(f64),
}

impl AtmosphereError {
    /// Arabic message shown to dashboard users.
    pub fn arabic_message(&self) -> &'static str {
        match self {
            AtmosphereError::HumidityOutOfRange(_) => "الرطوبة يجب أن تكون بين 0 و 100%",
            AtmosphereError::DewPointUndefined => "لا يمكن حساب نقطة الندى عند رطوبة 0%",
            AtmosphereError::InvalidTemperature(_) => "درجة الحرارة غير صالحة",
            AtmosphereError::InvalidArea(_) => "مساحة الجمع يجب أن تكون قيمة موجبة",
        }
    }
}
