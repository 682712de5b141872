use {
    super::error::IngestError,
    derive_more::Display,
    serde::{Deserialize, Serialize},
};

const PAID_MARKERS: &[&str] = &[
    "paid",
    "pago",
    "approved",
    "aprovado",
    "completed",
    "concluido",
    "settled",
    "confirmed",
    "confirmado",
    "captured",
    "capturado",
];

const PENDING_MARKERS: &[&str] = &[
    "pending",
    "pendente",
    "waiting",
    "aguardando",
    "waiting_payment",
    "processing",
    "processando",
    "analyzing",
    "analisando",
    "created",
    "criado",
    "authorized",
    "autorizado",
    "pre_authorized",
    "pre_autorizado",
];

const CANCELLED_MARKERS: &[&str] = &[
    "cancelled",
    "canceled",
    "cancelado",
    "refused",
    "recusado",
    "failed",
    "falhado",
    "rejected",
    "rejeitado",
    "expired",
    "expirado",
    "refunded",
    "estornado",
    "error",
    "erro",
];

/// Closed classification of the free-text gateway status. Assigned once at
/// ingestion and stored next to the raw status, so readers never re-run
/// substring matching on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    #[display("paid")]
    Paid,
    #[display("pending")]
    Pending,
    #[display("cancelled")]
    Cancelled,
    #[display("other")]
    Other,
}

impl StatusClass {
    /// Classify a raw gateway status string. Gateways report the same
    /// lifecycle state under many names (and languages); the marker lists
    /// mirror that vocabulary. Paid wins over pending, pending over
    /// cancelled, matching how the dashboard always bucketed these.
    pub fn classify(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if PAID_MARKERS.iter().any(|m| lower.contains(m)) {
            Self::Paid
        } else if PENDING_MARKERS.iter().any(|m| lower.contains(m)) {
            Self::Pending
        } else if CANCELLED_MARKERS.iter().any(|m| lower.contains(m)) {
            Self::Cancelled
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
            Self::Other => "other",
        }
    }
}

impl TryFrom<&str> for StatusClass {
    type Error = IngestError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "paid" => Ok(Self::Paid),
            "pending" => Ok(Self::Pending),
            "cancelled" => Ok(Self::Cancelled),
            "other" => Ok(Self::Other),
            other => Err(IngestError::Validation(format!(
                "unknown status class: {other}"
            ))),
        }
    }
}
