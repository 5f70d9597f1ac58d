//! Command line surface of the demo client.

use clap::{Parser, Subcommand};
use url::Url;

/// Parcel Gateway - exercise the Parcel Perfect ecomService API from a terminal
#[derive(Parser)]
#[command(name = "parcel-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Vendor endpoint, overrides PP_BASE_URL
    #[arg(long, global = true)]
    pub endpoint: Option<Url>,

    /// Token ID issued by Parcel Perfect; falls back to PP_TOKEN_ID
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the token is accepted by the vendor
    Validate,

    /// Look up places whose name matches
    PlacesByName {
        /// Place name, e.g. Johan
        name: String,
    },

    /// Look up places by postcode
    PlacesByPostcode {
        /// Postcode, e.g. 7700
        postcode: String,
    },

    /// Request a quote for the sample parcel between two places
    Quote {
        /// Origin place id, e.g. 2159
        #[arg(long)]
        from: i64,
        /// Destination place id, e.g. 4001
        #[arg(long)]
        to: i64,
    },

    /// Change the service on an existing quote
    UpdateService {
        /// Quote number, e.g. QTE02382646
        quote_no: String,
        /// Service code, e.g. ECO
        service: String,
        #[arg(long, default_value = "Test Shipment")]
        reference: String,
    },

    /// Book a collection for an existing quote
    Collect {
        quote_no: String,
        /// Collection window start (HH:MM)
        #[arg(long, default_value = "08:00")]
        start: String,
        /// Collection window end (HH:MM)
        #[arg(long, default_value = "17:00")]
        end: String,
        /// Do not print labels
        #[arg(long)]
        no_labels: bool,
        /// Do not print a waybill
        #[arg(long)]
        no_waybill: bool,
    },

    /// Run validate, quote, update-service and collect in one go
    Workflow {
        #[arg(long)]
        from: i64,
        #[arg(long)]
        to: i64,
        #[arg(long, default_value = "ECO")]
        service: String,
    },
}
