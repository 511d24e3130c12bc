use dotenvy::dotenv;
use spotibind::{client::SpotifyClient, prelude::*, token::AuthToken};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let client_id = std::env::var("CLIENT_ID").expect("Spotify client ID not in environment");
    let client_secret = std::env::var("CLIENT_SECRET").expect("Spotify client secret not in environment");

    let client = SpotifyClient::new();
    let token = AuthToken::new(&client, &client_id, &client_secret)
        .await
        .expect("failed to get access token");

    println!("Token expires at {:?}", token.expires_at());

    // an app-only token can access every endpoint that doesn't involve a user
    let album = client
        .album(&token, "4aawyAB9vmqN3uQ7FjRGTy", Some("FI"))
        .await
        .unwrap();

    println!(
        "{} - {} ({} tracks)",
        album.album.name,
        album.album.artists.first().map(|artist| artist.name.as_str()).unwrap_or_default(),
        album.tracks.total
    );

    let related = client
        .artist_related_artists(&token, "0OdUWJ0sBjDrqHygGUXeCF")
        .await
        .unwrap();

    if let Some(err) = related.validation_error() {
        println!("Some related artists failed validation: {err}");
    }

    for artist in related.items() {
        println!("{} ({})", artist.artist.name, artist.genres.join(", "));
    }

    // the validation trait is in the prelude
    album.validate(client.validation_mode()).unwrap();
}
