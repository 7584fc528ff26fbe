//! Modelo de Company
//!
//! Datos de la empresa operadora que se muestran en la cabecera y el pie.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Empresa operadora
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CompanyInfo {
    #[validate(length(min = 2, max = 255))]
    pub name: String,

    pub founded: String,
    pub headquarters: String,
    pub industry: String,

    #[validate(length(max = 500))]
    pub description: String,
}

impl CompanyInfo {
    /// Texto del pie de página
    pub fn copyright_notice(&self, year: u16) -> String {
        format!("© {} {}. All rights reserved.", year, self.name)
    }
}
