use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use parcel_gateway::{
    CollectionWindow, ContentLine, Credential, CredentialSource, GatewaySettings, Party,
    PrintOptions, QuoteDetails, RpcResponse, Session, VendorGateway,
};

use crate::cli::{Cli, Commands};

pub async fn run(cli: Cli, settings: GatewaySettings) -> Result<ExitCode> {
    let source = match cli.token {
        Some(token) => CredentialSource::Explicit(token),
        None => CredentialSource::Preconfigured,
    };
    let gateway = Arc::new(
        VendorGateway::from_settings(&settings).context("Failed to set up vendor gateway")?,
    );
    info!("Using vendor endpoint {}", settings.vendor.base_url);

    match cli.command {
        Commands::Validate => {
            let credential = source.resolve(&settings)?;
            if gateway.validate_credential(credential.as_str()).await {
                println!("valid ({})", credential.masked());
                Ok(ExitCode::SUCCESS)
            } else {
                println!("invalid");
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::PlacesByName { name } => {
            let credential = source.resolve(&settings)?;
            print_response(&gateway.lookup_place_by_name(&name, &credential).await?)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::PlacesByPostcode { postcode } => {
            let credential = source.resolve(&settings)?;
            print_response(&gateway.lookup_place_by_postcode(&postcode, &credential).await?)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Quote { from, to } => {
            let credential = source.resolve(&settings)?;
            let details = QuoteDetails::between(sample_sender(from), sample_recipient(to));
            let response = gateway
                .request_quote(&details, &sample_contents(), &credential)
                .await?;
            print_response(&response)?;
            if let Some(quote_no) = response.quote_no() {
                println!("quote number: {}", quote_no);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::UpdateService {
            quote_no,
            service,
            reference,
        } => {
            let credential = source.resolve(&settings)?;
            let response = gateway
                .update_service(&quote_no, &service, &reference, &credential)
                .await?;
            print_response(&response)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Collect {
            quote_no,
            start,
            end,
            no_labels,
            no_waybill,
        } => {
            let credential: Credential = source.resolve(&settings)?;
            let window = CollectionWindow::parse(&start, &end)?;
            let print = PrintOptions {
                print_labels: !no_labels,
                print_waybill: !no_waybill,
            };
            let response = gateway
                .convert_quote_to_collection(&quote_no, &window, &print, &credential)
                .await?;
            print_response(&response)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Workflow { from, to, service } => {
            let mut session = Session::new(gateway);
            if !session.authenticate(&source, &settings).await? {
                println!("Token authentication failed: Invalid token or token expired");
                return Ok(ExitCode::FAILURE);
            }
            session.select_places(from, to);

            let quote = session
                .request_quote(
                    QuoteDetails::between(sample_sender(from), sample_recipient(to)),
                    &sample_contents(),
                )
                .await?;
            print_response(&quote)?;
            if session.context().quote_no.is_none() {
                println!("Vendor did not return a quote number; stopping");
                return Ok(ExitCode::FAILURE);
            }

            print_response(&session.update_service(&service, "Test Shipment").await?)?;
            print_response(
                &session
                    .quote_to_collection(&CollectionWindow::default(), &PrintOptions::default())
                    .await?,
            )?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_response(response: &RpcResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response.body())?);
    Ok(())
}

fn sample_sender(place_id: i64) -> Party {
    Party {
        name: "Test Sender".to_string(),
        address: [
            "123 Test Street".to_string(),
            "Test Suburb".to_string(),
            "Test City".to_string(),
            String::new(),
        ],
        postcode: "1234".to_string(),
        contact: "John Sender".to_string(),
        phone: "0123456789".to_string(),
        cell: "0821234567".to_string(),
        email: "sender@test.com".to_string(),
        place_id,
        notify: true,
    }
}

fn sample_recipient(place_id: i64) -> Party {
    Party {
        name: "Test Recipient".to_string(),
        address: [
            "456 Destination Ave".to_string(),
            "Dest Suburb".to_string(),
            "Dest City".to_string(),
            String::new(),
        ],
        postcode: "5678".to_string(),
        contact: "Jane Recipient".to_string(),
        phone: "0987654321".to_string(),
        cell: "0829876543".to_string(),
        email: "recipient@test.com".to_string(),
        place_id,
        notify: true,
    }
}

fn sample_contents() -> Vec<ContentLine> {
    vec![ContentLine {
        item: 1,
        pieces: 1,
        dim1: 30,
        dim2: 20,
        dim3: 10,
        actmass: 2.5,
    }]
}
