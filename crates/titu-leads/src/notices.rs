//! User-facing notices raised by the lead form.

use titu_common::Notice;

pub fn missing_fields() -> Notice {
    Notice::error(
        "Campos requeridos",
        "Por favor completa todos los campos obligatorios incluyendo tamaño de empresa, \
         presupuesto e interés principal.",
    )
}

pub fn invalid_email() -> Notice {
    Notice::error("Email inválido", "Por favor ingresa un email válido.")
}

pub fn submitted() -> Notice {
    Notice::success(
        "¡Transformación iniciada! 🚀",
        "Nos contactaremos contigo en las próximas 24 horas.",
    )
}

pub fn transmission_failed() -> Notice {
    Notice::error(
        "Error de transmisión",
        "Hubo un problema al enviar tu mensaje. Por favor intenta de nuevo.",
    )
}
