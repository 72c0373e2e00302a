mod preview_summary;
