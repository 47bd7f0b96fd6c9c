fn main() {
    album_thumbnails_lib::run()
}
