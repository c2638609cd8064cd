use std::fs::File;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use supertable::prelude::*;
use supertable::section::COLLAPSE_GRACE;
use supertable::changes;

fn print_body(table: &TableRoot, placeholders: &[PlaceholderRow], skeleton: &LoadingRows) {
    let snapshot = table.snapshot();
    println!(
        "  state={:?} rows={} headers={} interactive={}",
        snapshot.view_state(),
        snapshot.row_count,
        snapshot.header_count,
        table.is_interactive()
    );
    for placeholder in placeholders {
        if let Some(cell) = placeholder.render(&snapshot) {
            println!("  [{:?} colspan={}] {}", cell.kind, cell.col_span, cell.content);
        }
    }
    if let Some(rows) = skeleton.render(&snapshot) {
        for row in rows {
            println!("  skeleton {:?}", row.cells);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("supertable-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let (notifier, listener) = changes::channel();
    let mut table = TableRoot::new(TableProps {
        loading: true,
        interactive: true,
        ..Default::default()
    });
    table.store().install_notifier(notifier);

    let sort = SortableHeader::new("Name", |direction| async move {
        log::info!("reloading sorted {direction:?}");
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok::<(), SortError>(())
    });
    let head = table
        .head()
        .cell(sort.clone())
        .cell("Email")
        .cell("Role");
    head.render();

    let placeholders = [
        PlaceholderRow::loading("Loading users..."),
        PlaceholderRow::searching("No users match your search"),
        PlaceholderRow::empty("No users yet"),
    ];
    let skeleton = LoadingRows::new(vec![SkeletonKind::Avatar, SkeletonKind::Text]).count(2);

    println!("initial load:");
    print_body(&table, &placeholders, &skeleton);

    let users = [
        ["Ada Lovelace", "ada@example.com", "admin"],
        ["Grace Hopper", "grace@example.com", "editor"],
    ];
    let mut rows: Vec<TableRow> = users
        .iter()
        .map(|user| table.row(user.iter().map(|c| c.to_string()).collect()))
        .collect();
    table.update(TableProps {
        interactive: true,
        ..Default::default()
    });
    log::debug!("changed while loading: {:?}", listener.take());
    println!("loaded:");
    print_body(&table, &placeholders, &skeleton);

    sort.click()?.await?;
    println!("sorted: {:?}", sort.direction());

    let query = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&query);
    let search = SearchField::default().on_search(move |value| {
        if let Ok(mut guard) = sink.lock() {
            *guard = Some(value);
        }
    });
    for text in ["z", "zz", "zzz "] {
        search.on_change(text);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    tokio::time::sleep(search.throttle_period()).await;
    println!("search emitted: {:?}", query.lock().ok().and_then(|q| q.clone()));

    // Nothing matches: the host drops its rows and flags the filter
    rows.clear();
    table.update(TableProps {
        filtering: true,
        interactive: true,
        ..Default::default()
    });
    println!("filtered:");
    print_body(&table, &placeholders, &skeleton);

    search.clear();
    table.update(TableProps::default());
    println!("cleared:");
    print_body(&table, &placeholders, &skeleton);

    let archived = SimpleSection::new(SimpleSectionProps {
        title: "Archived".into(),
        collapsible: true,
        ..Default::default()
    });
    archived.section().on_key(&Key::Enter.into());
    println!(
        "section after Enter: {:?}, content mounted: {}",
        archived.section().phase(),
        archived.section().is_content_mounted()
    );
    tokio::time::sleep(COLLAPSE_GRACE + Duration::from_millis(50)).await;
    println!(
        "section after grace: {:?}, view: {:?}",
        archived.section().phase(),
        archived.render(&table.snapshot()).content
    );

    Ok(())
}
