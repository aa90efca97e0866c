use anyhow::Context;

use estoque_core::ProductId;
use estoque_ledger::{MovementDraft, MovementKind, ProductFilter};
use estoque_store::{FileStore, StockService, sample_ledger};
use estoque_view::{
    category_chart, dashboard_cards, format_brl, monthly_chart, parse_sort_key, product_rows,
};

fn main() -> anyhow::Result<()> {
    estoque_observability::init();

    let data_dir = std::env::var("ESTOQUE_DATA_DIR").unwrap_or_else(|_| {
        tracing::warn!("ESTOQUE_DATA_DIR not set; using ./estoque-data");
        "./estoque-data".to_string()
    });

    let store = FileStore::open(&data_dir)
        .with_context(|| format!("failed to open data directory {data_dir}"))?;
    let mut service =
        StockService::open_or_seed(store, sample_ledger).context("failed to load ledger")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => print_report(&service, None),
        Some("report") => print_report(&service, args.get(1).map(String::as_str)),
        Some(command @ ("entrada" | "saida")) => {
            let kind = if command == "entrada" {
                MovementKind::Entrada
            } else {
                MovementKind::Saida
            };
            record(&mut service, kind, &args[1..])?;
        }
        Some(other) => {
            anyhow::bail!("unknown command {other:?} (expected: report, entrada, saida)")
        }
    }
    Ok(())
}

fn record(
    service: &mut StockService<FileStore>,
    kind: MovementKind,
    args: &[String],
) -> anyhow::Result<()> {
    let (id, quantity) = match args {
        [id, quantity, ..] => (id, quantity),
        _ => anyhow::bail!("usage: estoque <entrada|saida> <produto> <quantidade> [motivo...]"),
    };
    let product_id: ProductId = id
        .parse()
        .with_context(|| format!("invalid product id {id:?}"))?;
    let quantity: u32 = quantity
        .parse()
        .with_context(|| format!("invalid quantity {quantity:?}"))?;
    let reason = if args.len() > 2 {
        args[2..].join(" ")
    } else {
        default_reason(kind).to_string()
    };

    let movement = service.record_movement(MovementDraft {
        product_id,
        kind,
        quantity,
        reason,
    })?;

    let product = service
        .ledger()
        .product(product_id)
        .context("product vanished after recording")?;
    println!(
        "Movimentação {} registrada para {}: estoque atual {}",
        movement.id(),
        product.name(),
        product.quantity()
    );
    Ok(())
}

fn default_reason(kind: MovementKind) -> &'static str {
    match kind {
        MovementKind::Entrada => "Reposição de estoque",
        MovementKind::Saida => "Venda",
    }
}

fn print_report(service: &StockService<FileStore>, sort_key: Option<&str>) {
    let ledger = service.ledger();
    let cards = dashboard_cards(&service.dashboard());

    println!("== Resumo ==");
    println!("Total de produtos: {}", cards.total_products);
    println!("Valor do estoque:  {}", cards.total_value);
    println!("Estoque baixo:     {}", cards.low_stock_count);
    println!("Receita do mês:    {}", cards.monthly_revenue);

    let rows = product_rows(
        ledger,
        &ProductFilter::default(),
        sort_key.and_then(parse_sort_key),
    );
    println!();
    println!("== Produtos ==");
    println!(
        "{:<32} {:<14} {:>6} {:>14} {:>14}  {}",
        "Produto", "Categoria", "Qtd", "Preço", "Valor total", "Status"
    );
    for row in rows {
        println!(
            "{:<32} {:<14} {:>6} {:>14} {:>14}  {}",
            row.name, row.category, row.quantity, row.unit_price, row.total_value, row.status.label
        );
    }

    let monthly = monthly_chart(ledger);
    if !monthly.labels.is_empty() {
        println!();
        println!("== Movimentação mensal ==");
        for (index, label) in monthly.labels.iter().enumerate() {
            println!(
                "{label:>8}: entradas {:>5} | saídas {:>5}",
                monthly.entradas[index], monthly.saidas[index]
            );
        }
    }

    let categories = category_chart(ledger);
    if !categories.labels.is_empty() {
        println!();
        println!("== Receita por categoria ==");
        for (index, label) in categories.labels.iter().enumerate() {
            println!("{label:<14} {}", format_brl(categories.values[index]));
        }
    }
}
